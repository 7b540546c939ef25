#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Insert(InsertAction),
	Normal(NormalAction),
	Command(CommandAction),
	FilePicker(FilePickerAction),
	ToggleFilePicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
	Insert(char),
	Remove,
	Cr,
	SetNormalMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalAction {
	Up,
	Down,
	Left,
	Right,
	Delete,
	NewLineBelow,
	NewLineAbove,
	InsertAfterCursor,
	InsertAtEnd,
	InsertAtStart,
	SetInsertMode,
	SetCommandMode,
	JumpWordForward,
	JumpWordBackward,
	Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
	Append(char),
	RemoveLast,
	Exec,
	SetNormalMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePickerAction {
	Append(char),
	RemoveLast,
}
