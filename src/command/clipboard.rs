use async_trait::async_trait;

use crate::command::Command;

/// Copy text to the system clipboard.
pub struct CopyToClipboardCmd {
    label: String,
    text: String,
}

impl CopyToClipboardCmd {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl Command for CopyToClipboardCmd {
    fn name(&self) -> String {
        format!("Copying {} to clipboard", self.label)
    }

    async fn execute(self: Box<Self>) -> color_eyre::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(self.text)?;
        Ok(())
    }
}
