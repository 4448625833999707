// src/specs/contacts.rs
use std::sync::LazyLock;

use regex::Regex;

/// Column headers, in field order.
pub const HEADERS: [&str; 4] = ["Name", "Title", "Email", "Extension"];

/// One extracted contact. Not yet persisted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: String,
    pub extension: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            extension: extension.into(),
        }
    }

    /// All four fields present.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.is_empty())
    }

    /// Dedup key used by the store.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.email)
    }

    pub fn fields(&self) -> [&str; 4] {
        [&self.name, &self.title, &self.email, &self.extension]
    }

    pub fn to_row(&self) -> Vec<String> {
        self.fields().iter().map(|f| s!(*f)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Title,
    Email,
    Extension,
}

/// How one field sits in the markup: `anchor (value) terminator`.
/// Fragments are regex syntax; the compound pattern runs with `(?s)`.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    pub anchor: &'static str,
    pub value: &'static str,
    pub terminator: &'static str,
}

impl FieldRule {
    fn fragment(&self) -> String {
        join!(self.anchor, "(", self.value, ")", self.terminator)
    }

    /// This field on its own.
    pub fn regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&join!("(?s)", self.fragment()))
    }

    /// First value this rule captures in `text`, if any.
    #[cfg(test)]
    pub(crate) fn capture<'t>(&self, text: &'t str) -> Result<Option<&'t str>, regex::Error> {
        Ok(self
            .regex()?
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str()))
    }
}

/// A whole contact block: the four field rules in document order,
/// joined by lazy “anything” gaps.
#[derive(Clone, Copy, Debug)]
pub struct ExtractionRule {
    pub fields: [FieldRule; 4],
}

impl ExtractionRule {
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        let body = self
            .fields
            .iter()
            .map(FieldRule::fragment)
            .collect::<Vec<_>>()
            .join(".*?");
        Regex::new(&join!("(?s)", body))
    }

    /// Pattern marking where a block may begin (the first field's anchor).
    pub fn block_start(&self) -> Result<Regex, regex::Error> {
        Regex::new(&join!("(?s)", self.fields[0].anchor))
    }

    /// Second field's anchor. A candidate start only opens a block when this
    /// follows it before the next candidate.
    pub fn block_body(&self) -> Result<Regex, regex::Error> {
        Regex::new(&join!("(?s)", self.fields[1].anchor))
    }
}

/// Staff directory layout:
/// - name: `alt` of an image wrapped in a link
/// - title: cell after the `職　　稱：` label cell
/// - email: `mailto:` target after the `電子郵件 :` label
/// - extension: four digits after `#` in the `聯絡電話 :` field
pub const DIRECTORY_RULE: ExtractionRule = ExtractionRule {
    fields: [
        FieldRule {
            field: Field::Name,
            anchor: r#"<a\s[^>]*?href="[^"]*"[^>]*>\s*<img[^>]*?\salt=""#,
            value: r#"[^"]*"#,
            terminator: r#"".*?</a>"#,
        },
        FieldRule {
            field: Field::Title,
            anchor: r"職　　稱：</td>\s*<td>",
            value: r".*?",
            terminator: r"</td>",
        },
        FieldRule {
            field: Field::Email,
            anchor: r"電子郵件 :.*?mailto:",
            value: r#"[^"]*"#,
            terminator: r#"""#,
        },
        FieldRule {
            field: Field::Extension,
            anchor: r"聯絡電話 :.*?#",
            value: r"[0-9]{4}",
            terminator: r"</td>",
        },
    ],
};

/// Compiled form of an `ExtractionRule`.
pub struct Extractor {
    block: Regex,
    body: Regex,
    record: Regex,
    per_field: Vec<(Field, Regex)>,
}

impl Extractor {
    pub fn new(rule: &ExtractionRule) -> Result<Self, regex::Error> {
        let per_field = rule
            .fields
            .iter()
            .map(|f| f.regex().map(|re| (f.field, re)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            block: rule.block_start()?,
            body: rule.block_body()?,
            record: rule.compile()?,
            per_field,
        })
    }

    /// Contacts in document order. Blocks run from one block start to the
    /// next, so a block missing a field never borrows it from its neighbour.
    pub fn extract(&self, raw: &str) -> Vec<Contact> {
        let starts = self.block_starts(raw);

        let mut out = Vec::with_capacity(starts.len());
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(raw.len());
            let block = &raw[start..end];

            let Some(caps) = self.record.captures(block) else {
                logd!("Extract: block {i} dropped (no {:?})", self.first_missing(block));
                continue;
            };

            let get = |ix: usize| caps.get(ix).map_or_else(String::new, |m| s!(m.as_str()));
            let contact = Contact {
                name: get(1),
                title: get(2),
                email: get(3),
                extension: get(4),
            };

            if contact.is_complete() {
                out.push(contact);
            } else {
                logd!("Extract: block {i} dropped (empty field)");
            }
        }
        out
    }

    /// Offsets of name anchors followed by a title anchor before the next
    /// name anchor. Image links inside a block (mail icons, photos after the
    /// title) and page chrome before the first block are not starts.
    fn block_starts(&self, raw: &str) -> Vec<usize> {
        let anchors: Vec<usize> = self.block.find_iter(raw).map(|m| m.start()).collect();
        anchors
            .iter()
            .enumerate()
            .filter(|&(i, &at)| {
                let until = anchors.get(i + 1).copied().unwrap_or(raw.len());
                self.body.is_match(&raw[at..until])
            })
            .map(|(_, &at)| at)
            .collect()
    }

    fn first_missing(&self, block: &str) -> Option<Field> {
        self.per_field
            .iter()
            .find(|(_, re)| !re.is_match(block))
            .map(|(field, _)| *field)
    }
}

static DIRECTORY: LazyLock<Result<Extractor, regex::Error>> =
    LazyLock::new(|| Extractor::new(&DIRECTORY_RULE));

/// Extract contacts from a staff-directory page.
pub fn extract(raw: &str) -> Vec<Contact> {
    match &*DIRECTORY {
        Ok(x) => {
            let t = std::time::Instant::now();
            let out = x.extract(raw);
            logd!("Extract: {} contact(s) in {:?}", out.len(), t.elapsed());
            out
        }
        Err(e) => {
            loge!("Extract: rule failed to compile: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// One contact block shaped like the live directory markup.
    pub fn block(name: &str, title: &str, email: &str, ext: &str) -> String {
        format!(
            r#"
<div class="staff">
  <a href="/p/404-1031-{name}.php"><img src="/var/file/{name}.jpg" alt="{name}" title="{name}"></a>
  <table>
    <tr><td class="label">職　　稱：</td>
        <td>{title}</td></tr>
    <tr><td class="label">電子郵件 :</td>
        <td><a href="mailto:{email}">{email}</a></td></tr>
    <tr><td class="label">聯絡電話 :</td>
        <td>(04)2392-4505 #{ext}</td></tr>
  </table>
</div>
"#
        )
    }

    pub fn page(blocks: &[String]) -> String {
        let mut doc = s!("<html><head><title>Staff</title></head><body>\n");
        for b in blocks {
            doc.push_str(b);
        }
        doc.push_str("</body></html>\n");
        doc
    }
}
