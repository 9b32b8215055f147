use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "Menu-driven library catalog and loan tracker", long_about = None)]
pub struct Cli {
    /// Directory holding the catalog and ledger files
    #[arg(short, long, default_value = "Data")]
    pub data_dir: PathBuf,
}
