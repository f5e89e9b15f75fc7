//! The closed directive set
//!
//! Only three directives carry meaning for HTML output: `.context`, `.category` and `.topic`.
//! A fixed list of layout and metadata directives is accepted and ignored. Every other name is
//! rejected by the parser.

/// A recognized directive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `.context <id>`: declares a context for the current topic group.
    Context,
    /// `.category <tag>`: sets the current topic's category.
    Category,
    /// `.topic <title>`: sets the current topic's display title.
    Topic,
    /// A directive accepted for compatibility and otherwise ignored.
    Ignored(IgnoredDirective),
}

impl Directive {
    /// Look up a directive by its name (without the leading dot).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "context" => Some(Directive::Context),
            "category" => Some(Directive::Category),
            "topic" => Some(Directive::Topic),
            other => IgnoredDirective::from_name(other).map(Directive::Ignored),
        }
    }
}

/// Directives with no effect on the generated site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredDirective {
    Freeze,
    List,
    Paste,
    Popup,
    Ref,
    Mark,
    Length,
    End,
    Raw,
    Title,
    Command,
    File,
    Execute,
}

impl IgnoredDirective {
    pub const ALL: [IgnoredDirective; 13] = [
        IgnoredDirective::Freeze,
        IgnoredDirective::List,
        IgnoredDirective::Paste,
        IgnoredDirective::Popup,
        IgnoredDirective::Ref,
        IgnoredDirective::Mark,
        IgnoredDirective::Length,
        IgnoredDirective::End,
        IgnoredDirective::Raw,
        IgnoredDirective::Title,
        IgnoredDirective::Command,
        IgnoredDirective::File,
        IgnoredDirective::Execute,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IgnoredDirective::Freeze => "freeze",
            IgnoredDirective::List => "list",
            IgnoredDirective::Paste => "paste",
            IgnoredDirective::Popup => "popup",
            IgnoredDirective::Ref => "ref",
            IgnoredDirective::Mark => "mark",
            IgnoredDirective::Length => "length",
            IgnoredDirective::End => "end",
            IgnoredDirective::Raw => "raw",
            IgnoredDirective::Title => "title",
            IgnoredDirective::Command => "command",
            IgnoredDirective::File => "file",
            IgnoredDirective::Execute => "execute",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|directive| directive.name() == name)
    }
}
