use anyhow::Result;

use crate::scenarios::SCENARIOS;

pub fn run() -> Result<()> {
    for scenario in SCENARIOS {
        println!("{}", scenario.name);
    }
    Ok(())
}
