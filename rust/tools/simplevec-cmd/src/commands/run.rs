use anyhow::{Context, Result, bail};

use crate::scenarios::{SCENARIOS, Scenario};

pub fn run(names: Vec<String>) -> Result<()> {
    let selected = select(&names)?;
    log::debug!("running {} scenario(s)", selected.len());

    for scenario in selected {
        (scenario.run)().with_context(|| format!("scenario '{}' failed", scenario.name))?;
        println!("{} ... ok", scenario.name);
    }
    Ok(())
}

fn select(names: &[String]) -> Result<Vec<&'static Scenario>> {
    if names.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match SCENARIOS.iter().find(|s| s.name == name.as_str()) {
            Some(scenario) => selected.push(scenario),
            None => bail!("unknown scenario '{name}' (see `simplevec-cmd list`)"),
        }
    }
    Ok(selected)
}
