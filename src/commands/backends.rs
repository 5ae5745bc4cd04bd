//! Backends command implementation
//!
//! Lists the backend catalog, plain, detailed or as JSON.

use console::Style;

use stagehand::backend::{self, BackendDescriptor, Locality};
use stagehand::error::Result;

use crate::cli::BackendsArgs;

/// Run backends command
pub fn run(args: &BackendsArgs) -> Result<()> {
    if args.json {
        println!("{}", render_json(args.distributed)?);
        return Ok(());
    }

    if args.detailed {
        for b in backend::descriptors(args.distributed) {
            display_detailed(b);
        }
    } else {
        for name in backend::list_backends(args.distributed) {
            println!("{name}");
        }
    }

    Ok(())
}

fn render_json(distributed_only: bool) -> Result<String> {
    let backends: Vec<&BackendDescriptor> = backend::descriptors(distributed_only).collect();
    Ok(serde_json::to_string_pretty(&backends)?)
}

fn display_detailed(b: &BackendDescriptor) {
    let locality_style = match b.locality {
        Locality::Local => Style::new().green(),
        Locality::Distributed => Style::new().cyan(),
    };
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(b.name),
        locality_style.apply_to(format!("({})", b.locality))
    );
    println!("    {}", b.summary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_all() {
        let json: serde_json::Value = serde_json::from_str(&render_json(false).unwrap()).unwrap();
        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["mclapply", "parLapply", "future", "future_lapply", "Makefile"]
        );
    }

    #[test]
    fn test_render_json_distributed() {
        let json: serde_json::Value = serde_json::from_str(&render_json(true).unwrap()).unwrap();
        let backends = json.as_array().unwrap();
        assert_eq!(backends.len(), 3);
        assert!(backends.iter().all(|b| b["locality"] == "distributed"));
    }

    #[test]
    fn test_run_plain() {
        let args = BackendsArgs {
            distributed: false,
            detailed: false,
            json: false,
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_run_detailed() {
        let args = BackendsArgs {
            distributed: true,
            detailed: true,
            json: false,
        };
        assert!(run(&args).is_ok());
    }
}
