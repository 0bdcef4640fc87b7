// Fixed prompt text for the three generators.
// Each generator keeps its own defaults; the system-prompt and S.C.A.F.F.
// security fallbacks are intentionally not shared.

// ── System prompt generator ────────────────────────────────────────────────

/// Used when `securityApproach` is blank.
pub const SYSTEM_DEFAULT_SECURITY: &str = "You always implement security best practices including input validation, output encoding, authentication, authorization, and protection against common vulnerabilities (OWASP Top 10).";

/// Used when `errorHandlingStyle` is blank.
pub const SYSTEM_DEFAULT_ERROR_HANDLING: &str = "You implement comprehensive error handling with graceful degradation, user-friendly error messages, and proper logging for debugging.";

/// Used when `questionHandling` is blank.
pub const SYSTEM_DEFAULT_QUESTION_HANDLING: &str = "When requirements are unclear, you ask specific clarifying questions and suggest best practices based on common patterns.";

/// Body of the closing `# RESPONSE FORMAT` section.
pub const SYSTEM_RESPONSE_FORMAT: &str = "For every code generation request:
1. Generate complete, working code that follows all the above principles
2. Include appropriate comments based on your documentation style
3. Implement proper error handling and security measures
4. Provide setup/installation instructions when relevant
5. Explain key decisions and tradeoffs when appropriate
6. Suggest improvements or alternatives when beneficial

";

pub const SYSTEM_CLOSING_REMINDER: &str = "Remember: You embody these principles consistently across all interactions. Every piece of code you generate should reflect this system prompt's guidelines.";

pub const SYSTEM_PROMPT_FILE_NAME: &str = "system-prompt-vibe-coding.txt";

// ── S.C.A.F.F. user prompt generator ───────────────────────────────────────

/// Used when every Foundations field is blank.
pub const SCAFF_DEFAULT_FOUNDATIONS: &str =
    "Implement proper error handling, input validation, and follow security best practices.";

pub const SCAFF_INSTRUCTION: &str = "Generate complete, production-ready code that meets all the above requirements. Include comments explaining key decisions and provide any necessary setup instructions.";

pub const USER_PROMPT_FILE_NAME: &str = "vibe-coding-prompt.txt";

// ── Feature prompt generator ───────────────────────────────────────────────

pub const FEATURE_DEFAULT_PROJECT: &str = "a web application";

pub const FEATURE_DEFAULT_TECH_STACK: &str = "modern web technologies";

pub const FEATURE_AUDIENCE: &str =
    "Mid-level developers will maintain this code for long-term use (3+ years).";

pub const FEATURE_FORMAT: &str = "Use modern best practices, functional programming where appropriate, comprehensive error handling, and include detailed comments for complex logic.";

pub const FEATURE_FOUNDATIONS: &str = "Implement proper input validation, security best practices, comprehensive error handling, and ensure integration with existing systems. Include proper testing considerations and performance optimization.";
