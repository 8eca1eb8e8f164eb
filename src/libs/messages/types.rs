#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModulePicker,
    ConfigReadFailed(String),                // error
    StepRejected(u32),                       // step
    PredefinedValuesLoadFailed(String, String), // path, error
    LocalePatternsLoadFailed(String, String),   // path, error

    // === VALUE MESSAGES ===
    InvalidCanonicalValue(String), // input
    InvalidDisplayValue(String),   // input
    ListKeyNotFound(usize),
    ValueCleared,

    // === LIST MESSAGES ===
    TimeListHeader(u32),       // step
    PredefinedListHeader(usize), // count
    EmptyTimeList,

    // === PICK MESSAGES ===
    PickFromList,
    PickEnterManually,
    PickTryAgain,
    ChangeEventHeader,

    // === DEMO MESSAGES ===
    DemoHeader,
    DemoTimeChange(String), // canonical value

    // === PROMPTS ===
    PromptLocale,
    PromptStyle,
    PromptStep,
    PromptSourcePattern,
    PromptPredefinedValues,
    PromptLocalePatterns,
    PromptPickMode,
    PromptSelectTime,
    PromptTime(String), // display pattern
}
