use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "partscout",
    version,
    about = "TUI for searching electronic component supplier catalogs"
)]
pub struct Args {
    /// Supplier catalog to preselect (e.g., "LCSC")
    #[arg(short, long)]
    pub supplier: Option<String>,

    /// Part number to prefill in the search input
    #[arg(short, long)]
    pub part_number: Option<String>,
}
