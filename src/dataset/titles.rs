// Title ranking for the job title picker.

use std::collections::HashMap;

use serde::Serialize;

use super::JobPosting;

/// A job title and how many postings carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub postings: usize,
}

/// Rank titles by number of postings, most common first.
///
/// Ties keep first-appearance order in the dataset. At most `limit` titles
/// are returned.
pub fn top_titles(postings: &[JobPosting], limit: usize) -> Vec<TitleCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<TitleCount> = Vec::new();

    for posting in postings {
        match index.get(posting.title.as_str()) {
            Some(&i) => ranked[i].postings += 1,
            None => {
                index.insert(&posting.title, ranked.len());
                ranked.push(TitleCount {
                    title: posting.title.clone(),
                    postings: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.postings.cmp(&a.postings));
    ranked.truncate(limit);
    ranked
}

/// Turn a picker answer into a title.
///
/// A number in `1..=titles.len()` selects from the list; anything else is
/// taken as a title typed by hand.
pub fn resolve_choice(choice: &str, titles: &[TitleCount]) -> String {
    let choice = choice.trim();
    match choice.parse::<usize>() {
        Ok(n) if n >= 1 && n <= titles.len() => titles[n - 1].title.clone(),
        _ => choice.to_string(),
    }
}
