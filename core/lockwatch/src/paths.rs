//! `paths`: candidate lockfile locations in check order.

use lockwatch_core::LockwatchConfig;

pub fn run(config: &LockwatchConfig) {
    for line in render(&config.locator().probe()) {
        println!("{line}");
    }
}

fn render(probe: &[(std::path::PathBuf, bool)]) -> Vec<String> {
    probe
        .iter()
        .map(|(path, exists)| {
            let marker = if *exists { "found  " } else { "missing" };
            format!("{marker}\t{}", path.display())
        })
        .collect()
}
