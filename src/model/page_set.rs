//! An ordered, navigable set of page documents.

use serde::{Deserialize, Serialize};

use super::page::{PageFormat, MAIN_PAGE};

/// Pages sorted ascending by numeric page id.
///
/// A page set is produced once per feed refresh and replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSet {
    pages: Vec<PageFormat>,
}

impl PageSet {
    /// Build a page set, sorting pages by numeric id.
    ///
    /// Pages whose id is not a number sort last, in their original order.
    pub fn new(mut pages: Vec<PageFormat>) -> Self {
        pages.sort_by_key(|page| page.number().unwrap_or(u32::MAX));
        Self { pages }
    }

    /// All pages in ascending order.
    pub fn pages(&self) -> &[PageFormat] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over pages in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageFormat> {
        self.pages.iter()
    }

    /// Look up a page by number.
    pub fn get(&self, number: u32) -> Option<&PageFormat> {
        self.pages.iter().find(|page| page.number() == Some(number))
    }

    /// The main page, if present.
    pub fn main_page(&self) -> Option<&PageFormat> {
        self.get(MAIN_PAGE)
    }

    /// Directory pages in order.
    pub fn index_pages(&self) -> impl Iterator<Item = &PageFormat> {
        self.pages.iter().filter(|page| page.is_index())
    }

    /// Article pages in order.
    pub fn article_pages(&self) -> impl Iterator<Item = &PageFormat> {
        self.pages.iter().filter(|page| page.is_article())
    }

    /// Position of a page number, or 0 when it does not exist.
    pub fn position_of(&self, number: u32) -> usize {
        self.pages
            .iter()
            .position(|page| page.number() == Some(number))
            .unwrap_or(0)
    }

    /// Page number at a position, or the main page number when out of range.
    pub fn number_at(&self, position: usize) -> u32 {
        self.pages
            .get(position)
            .and_then(PageFormat::number)
            .unwrap_or(MAIN_PAGE)
    }

    /// The page after `number` in set order.
    pub fn next_number(&self, number: u32) -> Option<u32> {
        let position = self.exact_position(number)?;
        self.pages.get(position + 1).and_then(PageFormat::number)
    }

    /// The page before `number` in set order.
    pub fn previous_number(&self, number: u32) -> Option<u32> {
        let position = self.exact_position(number)?;
        position
            .checked_sub(1)
            .and_then(|p| self.pages.get(p))
            .and_then(PageFormat::number)
    }

    fn exact_position(&self, number: u32) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.number() == Some(number))
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a PageFormat;
    type IntoIter = std::slice::Iter<'a, PageFormat>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
