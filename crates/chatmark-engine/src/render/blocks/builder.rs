use crate::render::inline::resolve;
use crate::render::types::{ContentBlock, ListItem};

use super::classify::LineClass;

/// Open-list accumulator, carried explicitly through the fold over lines
/// instead of living in mutable closure state.
#[derive(Debug)]
enum ListState {
    None,
    Open { ordered: bool, items: Vec<ListItem> },
}

/// Folds classified lines of a plain-text run into content blocks.
///
/// Consecutive list items of the same kind merge into one `List` block;
/// a kind change, any non-list line, or end of input flushes the open
/// list first. Every other line becomes its own block.
pub struct RunBuilder {
    list: ListState,
    out: Vec<ContentBlock>,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self {
            list: ListState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass<'_>) {
        match class {
            LineClass::Blank => self.flush_list(),
            LineClass::Bullet { text } => self.push_item(false, None, text),
            LineClass::Ordered { number, text } => self.push_item(true, Some(number), text),
            LineClass::Heading { level, text } => {
                self.flush_list();
                self.out.push(ContentBlock::Heading {
                    level,
                    content: resolve(text),
                });
            }
            LineClass::Quote { text } => {
                self.flush_list();
                self.out.push(ContentBlock::BlockQuote {
                    content: resolve(text),
                });
            }
            LineClass::Rule => {
                self.flush_list();
                self.out.push(ContentBlock::HorizontalRule);
            }
            LineClass::Callout { kind, text } => {
                self.flush_list();
                self.out.push(ContentBlock::Callout {
                    kind,
                    content: resolve(text),
                });
            }
            LineClass::Text(text) => {
                self.flush_list();
                self.out.push(ContentBlock::Paragraph {
                    content: resolve(text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn push_item(&mut self, ordered: bool, number: Option<&str>, text: &str) {
        if let ListState::Open {
            ordered: open_kind, ..
        } = &self.list
        {
            if *open_kind != ordered {
                self.flush_list();
            }
        }
        let item = ListItem {
            content: resolve(text),
            number: number.map(str::to_string),
        };
        match &mut self.list {
            ListState::Open { items, .. } => items.push(item),
            ListState::None => {
                self.list = ListState::Open {
                    ordered,
                    items: vec![item],
                };
            }
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.list, ListState::None);
        if let ListState::Open { ordered, items } = prev {
            self.out.push(ContentBlock::List { ordered, items });
        }
    }
}

impl Default for RunBuilder {
    fn default() -> Self {
        Self::new()
    }
}
