//! Conversation steps, in the fixed order they are asked.

/// A position in the conversation: three entry steps, then the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Ask for an email address.
    Email,
    /// Ask what to call the person.
    Name,
    /// Ask what they need.
    Description,
    /// Show everything back before sending.
    Review,
}

impl Step {
    /// The entry steps, in the order they are asked. [`Step::Review`] has no
    /// field of its own.
    pub const FIELDS: [Step; 3] = [Step::Email, Step::Name, Step::Description];

    /// One-based position, [`Step::Review`] being 4.
    pub fn index(self) -> u8 {
        match self {
            Self::Email => 1,
            Self::Name => 2,
            Self::Description => 3,
            Self::Review => 4,
        }
    }

    /// The step after this one. [`Step::Review`] is terminal and returns
    /// itself.
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Name,
            Self::Name => Self::Description,
            Self::Description => Self::Review,
            Self::Review => Self::Review,
        }
    }

    /// Short label for completed lines and the entry control title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Review => "Review",
        }
    }

    /// The question shown while this step is active.
    pub fn question(self) -> &'static str {
        match self {
            Self::Email => "What's your email address?",
            Self::Name => "What should we call you?",
            Self::Description => "What can we help you with?",
            Self::Review => "Does everything look right?",
        }
    }

    /// Placeholder text for the entry control.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "you@example.com",
            Self::Name => "Ada Lovelace",
            Self::Description => "Tell us a little about it",
            Self::Review => "",
        }
    }
}
