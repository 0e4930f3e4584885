//! # Show Command Implementation
//!
//! Like `ls`, but also prints each matching node's attributes. Supports
//! two built-in dump formats (`--format json`, `--format yaml`) for
//! scripting, independent of the sandboxed `--format TEMPLATE` mechanism in
//! `fmf::format` that `{expr}`-style templates go through.

use anyhow::Result;
use clap::Args;

use fmf::format::expand_format;
use fmf::node::Node;
use fmf::value::{Map, Value};

use super::selection::SelectArgs;

/// List matching nodes along with their attributes
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Output format: `json`, `yaml`, or a `{expr}`-style template (see
    /// `fmf::format`). Defaults to an indented plain-text listing.
    #[arg(long, value_name = "FORMAT|TEMPLATE")]
    pub format: Option<String>,
}

/// Execute the `show` command.
pub fn execute(args: ShowArgs) -> Result<()> {
    let nodes = args.select.select()?;

    match args.format.as_deref() {
        None => {
            for node in &nodes {
                println!("{}", node.name());
                print_attributes(&selected_data(node, &args.select.keys));
            }
        }
        Some("json") => {
            for node in &nodes {
                let data = selected_data(node, &args.select.keys);
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
        }
        Some("yaml") => {
            for node in &nodes {
                let data = selected_data(node, &args.select.keys);
                print!("{}", serde_yaml::to_string(&data)?);
            }
        }
        Some(template) => {
            for node in &nodes {
                println!("{}", expand_format(node, template)?);
            }
        }
    }
    Ok(())
}

/// The node's data, narrowed to `--key`-selected attributes when given.
fn selected_data(node: &Node, keys: &[String]) -> Map {
    if keys.is_empty() {
        return node.data().clone();
    }
    let data = node.data();
    let mut out = Map::new();
    for key in keys {
        if let Some(value) = data.get(key.as_str()) {
            out.insert(Value::String(key.clone()), value.clone());
        }
    }
    out
}

fn print_attributes(data: &Map) {
    for (key, value) in data.iter() {
        println!("    {}: {}", fmf::value::to_display_string(key), fmf::value::to_display_string(value));
    }
}
