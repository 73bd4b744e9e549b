//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use methodfit_domain::{Catalog, MethodId};

/// Execute the show command: print the detail card for one method.
pub fn execute_show(args: ShowArgs, formatter: &Formatter) -> Result<()> {
    let id = MethodId::parse(&args.id).ok_or_else(|| CliError::UnknownMethod(args.id.clone()))?;
    println!("{}", formatter.format_method_details(Catalog::get(id))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_known_method() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = ShowArgs {
            id: "diaphragm".to_string(),
        };
        assert!(execute_show(args, &formatter).is_ok());
    }

    #[test]
    fn test_unknown_method() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = ShowArgs {
            id: "implant".to_string(),
        };
        match execute_show(args, &formatter) {
            Err(CliError::UnknownMethod(id)) => assert_eq!(id, "implant"),
            other => panic!("Expected UnknownMethod, got {:?}", other.map(|_| ())),
        }
    }
}
