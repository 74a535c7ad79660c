//! Fixed strings for the terminal surface.

pub(crate) const PROMPT_HINT: &str = "Type a question, or :help for commands.";
pub(crate) const USER_LABEL: &str = "you";
pub(crate) const ASSISTANT_LABEL: &str = "assistant";
pub(crate) const THINKING_LINE: &str = "assistant is thinking...";
/// Advisory only; nothing client-side enforces it.
pub(crate) const MAX_SIZE_HINT: &str = "max 10 MB";
pub(crate) const HELP_TEXT: &str = "\
Commands:
  :mode url|upload   switch the document source
  :url <value>       set the PDF url
  :file <path>       pick a PDF file
  :remove            remove the picked file
  :clear             clear the chat
  :help              show this help
  :quit              exit
A plain line is sent as a question; a line naming an existing file is
treated as a dropped file.";
