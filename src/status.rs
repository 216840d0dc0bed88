use crate::layout::Layout;

/// Installation state of the vendored loader.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallState {
    NotInstalled,
    Partial { reasons: Vec<String> },
    Installed { details: Vec<String> },
}

/// Detect the loader state (read-only; performs no writes).
pub fn detect(layout: &Layout) -> InstallState {
    if !layout.base().exists() {
        return InstallState::NotInstalled;
    }

    let mut reasons = Vec::new();
    for dir in layout.dirs() {
        if !dir.is_dir() {
            reasons.push(format!("{} missing", dir));
        }
    }
    for file in layout.loader_files() {
        if !file.is_file() {
            reasons.push(format!("{} missing", file));
        }
    }

    if reasons.is_empty() {
        InstallState::Installed {
            details: layout
                .loader_files()
                .iter()
                .map(|file| file.to_string())
                .collect(),
        }
    } else {
        InstallState::Partial { reasons }
    }
}

/// Print a human-readable report for a detected state.
pub fn report(layout: &Layout, state: &InstallState) {
    match state {
        InstallState::NotInstalled => {
            println!("[missing] {}: layout not created, run `glad-setup`", layout.base());
        }
        InstallState::Partial { reasons } => {
            println!("[partial] {}:", layout.base());
            for reason in reasons {
                println!("  - {}", reason);
            }
        }
        InstallState::Installed { details } => {
            println!("[ok] {}: loader files present", layout.base());
            for detail in details {
                println!("  - {}", detail);
            }
        }
    }
}
