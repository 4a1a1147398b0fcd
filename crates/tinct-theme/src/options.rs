//! Scheme options: the `:set` system.
//!
//! Parses `:set`-style directives and applies them to a [`SchemeConfig`].
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                           |
//! |-----------------|----------------------------------|
//! | `option`        | Enable boolean / query value     |
//! | `nooption`      | Disable boolean                  |
//! | `option!`       | Toggle boolean                   |
//! | `option?`       | Query current value              |
//! | `option=value`  | Assign a value                   |
//! | (empty)         | Show changed options             |
//! | `all`           | Show all options                 |
//!
//! # Option names
//!
//! | Full name   | Abbrev | Type     | Default    |
//! |-------------|--------|----------|------------|
//! | `dark`      | `dk`   | bool     | false      |
//! | `trueblack` | `tb`   | bool     | false      |
//! | `strength`  | `st`   | strength | `medium`   |
//! | `primary`   | `pr`   | color    | (preset)   |
//! | `scheme`    | `sc`   | name     | `material` |

use tinct_color::Color;

use crate::builtin::builtin_seed;
use crate::error::ThemeError;
use crate::mode::Brightness;
use crate::roles::Seed;
use crate::scheme::{SchemeConfig, SeedSource};

/// A parsed `:set` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option`: enable a boolean option.
    On(String),

    /// `nooption`: disable a boolean option.
    Off(String),

    /// `option!`: toggle a boolean option.
    Toggle(String),

    /// `option?`: query the current value.
    Query(String),

    /// `option=value`: assign a value.
    Assign(String, String),

    /// No arguments: show changed options.
    ShowChanged,

    /// `all`: show all options.
    ShowAll,
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    matches!(name, "dark" | "dk" | "trueblack" | "tb")
}

/// Returns `true` if `name` is a known valued option (full name or abbreviation).
#[must_use]
pub fn is_value_option(name: &str) -> bool {
    matches!(
        name,
        "strength" | "st" | "primary" | "pr" | "scheme" | "sc"
    )
}

/// Parse the full `:set` arguments string into directives.
///
/// Multiple space-separated arguments are supported
/// (e.g., `dark strength=heavy`). An empty string produces
/// [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `:set` argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // `no` prefix only counts when the rest is a boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }

    // A bare valued option queries it.
    if is_value_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    SetDirective::On(arg.to_string())
}

/// Format a boolean option for display.
///
/// Returns `"name"` when true, `"noname"` when false.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Applying directives
// ---------------------------------------------------------------------------

/// Canonical option, after abbreviation expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionName {
    Dark,
    TrueBlack,
    Strength,
    Primary,
    Scheme,
}

impl OptionName {
    const ALL: [Self; 5] = [Self::Dark, Self::TrueBlack, Self::Strength, Self::Primary, Self::Scheme];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" | "dk" => Some(Self::Dark),
            "trueblack" | "tb" => Some(Self::TrueBlack),
            "strength" | "st" => Some(Self::Strength),
            "primary" | "pr" => Some(Self::Primary),
            "scheme" | "sc" => Some(Self::Scheme),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::TrueBlack => "trueblack",
            Self::Strength => "strength",
            Self::Primary => "primary",
            Self::Scheme => "scheme",
        }
    }
}

impl SchemeConfig {
    /// Apply one directive.
    ///
    /// Returns `Some(text)` for directives that produce output (queries,
    /// `ShowChanged`, `ShowAll`) and `None` for ones that only modify.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownOption`] for an unrecognized name or a boolean
    /// directive on a valued option, and [`ThemeError::InvalidValue`] /
    /// [`ThemeError::UnknownScheme`] / [`ThemeError::Color`] when a value
    /// doesn't parse.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, ThemeError> {
        match directive {
            SetDirective::ShowAll => Ok(Some(self.show(|_| true))),
            SetDirective::ShowChanged => {
                let defaults = Self::default();
                Ok(Some(self.show(|opt| self.format(opt) != defaults.format(opt))))
            }
            SetDirective::Query(name) => Ok(Some(self.format(lookup(name)?))),
            SetDirective::On(name) => self.set_bool(name, |_| true),
            SetDirective::Off(name) => self.set_bool(name, |_| false),
            SetDirective::Toggle(name) => self.set_bool(name, |v| !v),
            SetDirective::Assign(name, value) => {
                self.assign(lookup(name)?, value)?;
                Ok(None)
            }
        }
    }

    /// Parse `args` and apply every directive, collecting output lines.
    ///
    /// # Errors
    ///
    /// Stops at the first directive that fails.
    pub fn apply_set(&mut self, args: &str) -> Result<Vec<String>, ThemeError> {
        let mut out = Vec::new();
        for directive in parse_set(args) {
            out.extend(self.apply(&directive)?);
        }
        Ok(out)
    }

    fn set_bool(
        &mut self,
        name: &str,
        update: impl FnOnce(bool) -> bool,
    ) -> Result<Option<String>, ThemeError> {
        match lookup(name)? {
            OptionName::Dark => self.mode = Brightness::from_dark(update(self.mode.is_dark())),
            OptionName::TrueBlack => self.true_black = update(self.true_black),
            // Valued options don't take boolean forms.
            _ => return Err(ThemeError::UnknownOption(name.to_string())),
        }
        Ok(None)
    }

    fn assign(&mut self, option: OptionName, value: &str) -> Result<(), ThemeError> {
        let invalid = || ThemeError::InvalidValue {
            option: option.name().to_string(),
            value: value.to_string(),
        };
        match option {
            OptionName::Dark | OptionName::TrueBlack => {
                let flag = parse_flag(value).ok_or_else(invalid)?;
                if option == OptionName::Dark {
                    self.mode = Brightness::from_dark(flag);
                } else {
                    self.true_black = flag;
                }
            }
            OptionName::Strength => {
                self.strength = value.parse().map_err(|_| invalid())?;
            }
            OptionName::Primary => {
                self.seed = SeedSource::Custom(Seed::Primary(Color::parse(value)?));
            }
            OptionName::Scheme => {
                if builtin_seed(value, self.mode).is_none() {
                    return Err(ThemeError::UnknownScheme(value.to_string()));
                }
                self.seed = SeedSource::Builtin(value.to_string());
            }
        }
        Ok(())
    }

    fn format(&self, option: OptionName) -> String {
        let name = option.name();
        match option {
            OptionName::Dark => format_bool(name, self.mode.is_dark()),
            OptionName::TrueBlack => format_bool(name, self.true_black),
            OptionName::Strength => format!("{name}={}", self.strength),
            OptionName::Primary => match self.resolve_seed() {
                Ok(seed) => format!("{name}={}", seed.primary()),
                Err(_) => format!("{name}="),
            },
            OptionName::Scheme => format!("{name}={}", self.name()),
        }
    }

    fn show(&self, include: impl Fn(OptionName) -> bool) -> String {
        OptionName::ALL
            .into_iter()
            .filter(|&opt| include(opt))
            .map(|opt| self.format(opt))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn lookup(name: &str) -> Result<OptionName, ThemeError> {
    OptionName::from_name(name).ok_or_else(|| ThemeError::UnknownOption(name.to_string()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
