use anyhow::Result;
use console::{Style, Term};
use zeroize::Zeroizing;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = match option_env!("MKPW_GIT_HASH") {
    Some(hash) => hash,
    None => "unknown",
};

pub struct DisplayOptions {
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            color_support: detect_color_support(),
        }
    }
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn version_lines() -> [String; 2] {
    [
        format!("Version: {}", VERSION),
        format!("Git Commit Hash: {}", GIT_HASH),
    ]
}

pub fn display_version() -> Result<()> {
    let term = Term::stdout();
    for line in version_lines() {
        term.write_line(&line)?;
    }
    Ok(())
}

/// Writes the password alone on its line. No styling, so it can be piped.
pub fn display_password(password: &Zeroizing<String>) -> Result<()> {
    Term::stdout().write_line(password)?;
    Ok(())
}

pub fn display_error(message: &str, options: &DisplayOptions) -> Result<()> {
    let style = if options.color_support {
        Style::new().red()
    } else {
        Style::new()
    };

    Term::stdout().write_line(&style.apply_to(message).to_string())?;
    Ok(())
}
