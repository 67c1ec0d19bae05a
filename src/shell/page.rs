//! The page the shell lives on.
//!
//! A [`Page`] is an ordered set of named panels. The `rm` command removes
//! panels by id, and `rm -rf /` clears the whole page. Elements are never
//! added after construction.

use std::fmt;
use thiserror::Error;

/// Identifier of a page element, as typed after `rm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an element is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Full-width strip above the shell.
    Header,
    /// Stacked panels to the right of the shell.
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub title: String,
    pub region: Region,
    pub lines: Vec<String>,
}

impl Element {
    #[cfg(test)]
    pub fn new(id: &str, title: &str, region: Region, lines: &[&str]) -> Self {
        Self {
            id: ElementId::new(id),
            title: title.to_string(),
            region,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("duplicate page element id `{0}`")]
    DuplicateId(ElementId),
    #[error("invalid page element id `{0}`: ids must be non-empty and contain no spaces")]
    InvalidId(ElementId),
}

#[derive(Debug, Default, Clone)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    /// Build a page, rejecting ids that `rm` could never address.
    pub fn new(elements: Vec<Element>) -> Result<Self, PageError> {
        for (i, el) in elements.iter().enumerate() {
            if el.id.as_str().is_empty() || el.id.as_str().contains(char::is_whitespace) {
                return Err(PageError::InvalidId(el.id.clone()));
            }
            if elements[..i].iter().any(|prev| prev.id == el.id) {
                return Err(PageError::DuplicateId(el.id.clone()));
            }
        }
        Ok(Self { elements })
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_str() == id)
    }

    /// Detach the element with the given id from the page.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let idx = self.elements.iter().position(|el| el.id.as_str() == id)?;
        Some(self.elements.remove(idx))
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn in_region(&self, region: Region) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |el| el.region == region)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
