/// All semantic actions a key can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusPrevList,
    FocusNextList,
    SelectPrevCard,
    SelectNextCard,
    JumpToFirstCard,
    JumpToLastCard,

    // List actions
    NewList,
    RenameList,
    DeleteList,

    // Card actions
    NewCard,
    EditCard,
    DeleteCard,

    // Text entry (drafts and inline edits)
    InputConfirm,
    InputCancel,
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    InputDeleteWord,

    // Confirmation
    Confirm,
    Deny,

    ShowHelp,
    Quit,

    // No-op
    None,
}
