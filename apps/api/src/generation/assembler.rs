//! Section-ordered text assembly shared by every prompt generator.
//!
//! A generator fills `Section`s in declaration order and hands them to an
//! `Assembler`, which decides whether each header is emitted. Nothing here can
//! fail: a blank field simply contributes no fragment.

/// Whether a section's header survives when no field contributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    Always,
    WhenPopulated,
}

/// How a section header is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// `# TITLE` on its own line.
    Markdown,
    /// `**TITLE:**` on its own line.
    Bold,
    /// `TITLE: ` inline, with sections separated by a blank line.
    Inline,
}

#[derive(Debug, Clone)]
pub struct Section {
    title: &'static str,
    policy: HeaderPolicy,
    body: String,
    populated: bool,
}

impl Section {
    pub fn mandatory(title: &'static str) -> Self {
        Self {
            title,
            policy: HeaderPolicy::Always,
            body: String::new(),
            populated: false,
        }
    }

    pub fn optional(title: &'static str) -> Self {
        Self {
            policy: HeaderPolicy::WhenPopulated,
            ..Self::mandatory(title)
        }
    }

    /// Appends `text` followed by a blank line.
    pub fn paragraph(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.body.push_str(text.as_ref());
        self.body.push_str("\n\n");
        self.populated = true;
        self
    }

    /// Appends `text` with no separator.
    pub fn clause(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.body.push_str(text.as_ref());
        self.populated = true;
        self
    }

    /// Appends `render(value)` as a paragraph when `value` is non-empty.
    pub fn field(&mut self, value: &str, render: impl FnOnce(&str) -> String) -> &mut Self {
        if !value.is_empty() {
            self.paragraph(render(value));
        }
        self
    }

    /// Like [`Section::field`], but writes `fallback` when `value` is empty.
    pub fn field_or(
        &mut self,
        value: &str,
        render: impl FnOnce(&str) -> String,
        fallback: &str,
    ) -> &mut Self {
        if value.is_empty() {
            self.paragraph(fallback)
        } else {
            self.paragraph(render(value))
        }
    }

    /// Appends `render(value)` as a clause when `value` is non-empty.
    pub fn field_clause(&mut self, value: &str, render: impl FnOnce(&str) -> String) -> &mut Self {
        if !value.is_empty() {
            self.clause(render(value));
        }
        self
    }

    /// Appends trailing text without marking the section as populated.
    pub fn terminate(&mut self, text: &str) -> &mut Self {
        self.body.push_str(text);
        self
    }
}

#[derive(Debug)]
pub struct Assembler {
    style: HeadingStyle,
    out: String,
}

impl Assembler {
    pub fn new(style: HeadingStyle) -> Self {
        Self {
            style,
            out: String::new(),
        }
    }

    /// Emits `section` unless it is optional and nothing populated it.
    pub fn push(&mut self, section: Section) -> &mut Self {
        if section.policy == HeaderPolicy::WhenPopulated && !section.populated {
            return self;
        }

        match self.style {
            HeadingStyle::Markdown => {
                self.out.push_str("# ");
                self.out.push_str(section.title);
                self.out.push('\n');
            }
            HeadingStyle::Bold => {
                self.out.push_str("**");
                self.out.push_str(section.title);
                self.out.push_str(":**\n");
            }
            HeadingStyle::Inline => {
                if !self.out.is_empty() {
                    self.out.push_str("\n\n");
                }
                self.out.push_str(section.title);
                self.out.push_str(": ");
            }
        }
        self.out.push_str(&section.body);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
