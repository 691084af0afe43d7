use clap::Parser;
use std::path::PathBuf;

/// Characters parsed when `--characters` is not given
pub const DEFAULT_CHARACTERS: &str =
    "Researchchanter:Enchanter,Researchmage:Magician,Researchnecro:Necromancer,Researchwizard:Wizard";

#[derive(Parser, Debug, Clone)]
#[command(name = "research-pages")]
#[command(about = "Tally research pages held across character inventory exports")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing the `{character}-Inventory.txt` exports
    #[arg(long = "eqdirectory", visible_alias = "directory", short = 'd', value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Characters to parse as comma-separated `name:Class` tuples
    /// Example: "Researchchanter:Enchanter,Researchmage:Magician"
    #[arg(long, value_name = "NAME:CLASS,...", default_value = DEFAULT_CHARACTERS)]
    pub characters: String,

    /// Research item catalog (columns: id, name, class)
    #[arg(long, value_name = "PATH", default_value = "researchpagedb.txt")]
    pub catalog: PathBuf,

    /// Blacklisted items (columns: id, name)
    #[arg(long, value_name = "PATH", default_value = "blacklist.txt")]
    pub blacklist: PathBuf,

    /// Print one combined list instead of a section per class
    #[arg(long)]
    pub combined: bool,

    /// Sort by item name only, ignoring class
    #[arg(long)]
    pub sort_by_name: bool,

    /// Append the item's class in brackets to lines with no other suffix
    #[arg(long)]
    pub class_tags: bool,

    /// Print headers for classes with no items
    #[arg(long)]
    pub show_empty: bool,

    /// Also write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    ///
    /// Malformed `--characters` tuples are not rejected here; config skips them.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref json) = self.json
            && json.is_dir()
        {
            return Err(format!("--json path {} is a directory", json.display()));
        }

        Ok(())
    }
}
