//! Error display for CLI commands

use console::style;
use essh_core::HostError;

/// Print an error with its cause chain and, when known, a hint
pub fn show_error(err: &anyhow::Error) {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", style("caused by:").dim(), cause);
    }

    if let Some(tip) = error_tip(err) {
        eprintln!();
        eprintln!("  {} {}", style("Tip:").cyan(), tip);
    }
}

fn error_tip(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<HostError>()? {
        HostError::NotFound(_) => Some("List available hosts with: essh hosts --all"),
        HostError::LoadFailed(_) | HostError::InvalidConfig(_) => {
            Some("Check the hosts file for syntax errors or unknown fields.")
        }
        HostError::WriteFailed(_) => None,
    }
}
