use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static STYLE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<!--.*?tab\.css.*?\(start\).*?-->).*?(<!--.*?tab\.css.*?\(end\).*?-->)")
        .unwrap()
});

static SCRIPT_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<!--.*?tab\.js\s+start.*?-->).*?(<!--.*?tab\.js\s+end.*?-->)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRole {
    Style,
    Script,
}

impl AssetRole {
    /// Token that must appear inside this role's marker comments.
    pub fn token(self) -> &'static str {
        match self {
            AssetRole::Style => "tab.css",
            AssetRole::Script => "tab.js",
        }
    }

    fn region(self) -> &'static Regex {
        match self {
            AssetRole::Style => &STYLE_REGION,
            AssetRole::Script => &SCRIPT_REGION,
        }
    }

    fn wrap(self, asset: &str) -> String {
        match self {
            AssetRole::Style => format!("<style>\n{asset}\n</style>"),
            AssetRole::Script => format!("<script>\n{asset}\n</script>"),
        }
    }
}

#[derive(Debug)]
pub enum InlineOutcome {
    Replaced { document: String },
    NoMatch,
}

/// Replace the interior of the first marker pair for `role` with the asset
/// wrapped in its embedding tag. Only the first pair is rewritten; both
/// marker comments are kept verbatim. A document with no pair for the role
/// comes back as `NoMatch`.
pub fn inline(document: &str, role: AssetRole, asset: &str) -> InlineOutcome {
    let wrapped = role.wrap(asset);
    // Closure replacer: `$` in asset text must stay literal, not become a
    // capture reference.
    match role.region().replace(document, |caps: &Captures| {
        format!("{}\n{}\n{}", &caps[1], wrapped, &caps[2])
    }) {
        Cow::Owned(document) => InlineOutcome::Replaced { document },
        Cow::Borrowed(_) => InlineOutcome::NoMatch,
    }
}
