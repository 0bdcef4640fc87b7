//! Download documents and their file names.

use crate::models::catalog::QuickPrompt;

/// Renders a quick prompt as a standalone Markdown document.
pub fn quick_prompt_markdown(prompt: &QuickPrompt) -> String {
    let tech_stack = match &prompt.tech_stack {
        Some(stack) if !stack.is_empty() => stack.join(", "),
        _ => "Not specified".to_string(),
    };

    format!(
        "# {title}\n\
         \n\
         ## Description\n\
         {description}\n\
         \n\
         ## Use Case\n\
         {use_case}\n\
         \n\
         ## Tech Stack\n\
         {tech_stack}\n\
         \n\
         ## Complexity: {complexity}\n\
         ## Estimated Time: {estimated_time}\n\
         \n\
         ## Tags\n\
         {tags}\n\
         \n\
         ---\n\
         \n\
         ## Prompt\n\
         \n\
         {body}\n\
         \n\
         ---\n\
         Generated from Vibe Coding Quick Prompt Library\n\
         Last Updated: {last_updated}",
        title = prompt.title,
        description = prompt.description,
        use_case = prompt.use_case,
        complexity = prompt.complexity,
        estimated_time = prompt.estimated_time,
        tags = prompt.tags.join(", "),
        body = prompt.prompt,
        last_updated = prompt.last_updated.format("%Y-%m-%d"),
    )
}

/// `Prisma Schema Design` becomes `prisma-schema-design-prompt.md`.
pub fn quick_prompt_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    format!("{slug}-prompt.md")
}

/// Plan export file name; path separators in the project name become `-`.
pub fn plan_file_name(project_name: &str) -> String {
    let base = if project_name.is_empty() {
        "project".to_string()
    } else {
        project_name.replace(['/', '\\'], "-")
    };
    format!("{base}-feature-plan.json")
}
