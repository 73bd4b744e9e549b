//! Methods command implementation.

use crate::error::Result;
use crate::output::Formatter;
use methodfit_domain::{Catalog, Method};

/// Execute the methods command: list the catalog in catalog order.
pub fn execute_methods(formatter: &Formatter) -> Result<()> {
    let methods: Vec<&'static Method> = Catalog::iter().collect();
    println!("{}", formatter.format_methods(&methods)?);
    Ok(())
}
