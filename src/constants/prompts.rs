pub const SYSTEM_PROMPT: &str = "You are an expert coding tutor and problem solver.";

pub const INSTRUCTION: &str =
    "Write a clear, efficient code snippet to solve the following coding question:";

/// `{language}` is replaced with the target language display name.
pub const LANGUAGE_TEMPLATE: &str = "Write the solution in {language}.";

pub const FORMAT_HEADER: &str = "Return your answer in this format:";

pub const CODE_PLACEHOLDER: &str = "[code here]";
pub const TIME_COMPLEXITY_PLACEHOLDER: &str = "[time complexity in Big-O notation]";
pub const SPACE_COMPLEXITY_PLACEHOLDER: &str = "[space complexity in Big-O notation]";
pub const DIFFICULTY_PLACEHOLDER: &str = "[Easy, Medium or Hard]";
pub const ALTERNATIVES_PLACEHOLDER: &str = "[alternative approaches, one per line]";
pub const ALTERNATIVES_COMPLEXITY_PLACEHOLDER: &str =
    "[time and space complexity of each alternative approach]";
pub const EXPLANATION_PLACEHOLDER: &str = "[concise explanation here]";
pub const FLOW_PLACEHOLDER: &str = "[step-by-step flow of the solution, one step per line]";
pub const OPTIMIZER_PLACEHOLDER: &str = "[suggestions to optimize the code]";
pub const DEBUGGER_PLACEHOLDER: &str = "[common bugs and edge cases to check]";
pub const RELATED_PLACEHOLDER: &str = "[related coding problems, one per line]";
