pub const TITLE: &str = "College Advisor";
pub const CHAT_HEADER: &str = "== Chat ==";
pub const CHAT_CLOSED: &str = "[chat closed, type /open to talk to us]";
pub const CHAT_WELCOME: &str = "Start a conversation by asking about any college!";
pub const CHAT_THINKING: &str = "agent> Thinking...";
pub const CHAT_PROMPT_HINT: &str = "Ask about college cutoffs, fees, packages...";
pub const USER_PREFIX: &str = "you>";
pub const AGENT_PREFIX: &str = "agent>";

pub const PARSER_HEADER: &str = "== PDF Cutoff Data Parser ==";
pub const PARSER_EMPTY: &str = "Choose a PDF file with /attach <path> (PDF files only, up to 16MB)";
pub const PARSER_PROCESSING: &str = "Processing...";
pub const PARSER_SUCCESS: &str = "Parsing Successful!";
pub const PARSER_STORED: &str =
    "The PDF data has been successfully parsed and stored in the database.";
