use super::*;
use imgbed_entities as e;

impl From<e::tag::TagAction> for TagAction {
    fn from(from: e::tag::TagAction) -> Self {
        use e::tag::TagAction as A;
        match from {
            A::Set => Self::Set,
            A::Add => Self::Add,
            A::Remove => Self::Remove,
        }
    }
}

impl From<TagAction> for e::tag::TagAction {
    fn from(from: TagAction) -> Self {
        match from {
            TagAction::Set => Self::Set,
            TagAction::Add => Self::Add,
            TagAction::Remove => Self::Remove,
        }
    }
}

impl From<Tags> for Vec<String> {
    fn from(from: Tags) -> Self {
        from.tags.unwrap_or_default()
    }
}
