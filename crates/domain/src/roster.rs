//! Set operations over student rosters.

use std::collections::HashSet;

use crate::email::Email;

/// Students registered to *every* roster.
///
/// Keeps the order of the first roster and stops consuming rosters as soon as
/// the intersection is empty. No rosters yields an empty list.
#[must_use]
pub fn common_students<I>(rosters: I) -> Vec<Email>
where
    I: IntoIterator<Item = Vec<Email>>,
{
    let mut rosters = rosters.into_iter();
    let Some(mut common) = rosters.next() else {
        return Vec::new();
    };

    for roster in rosters {
        if common.is_empty() {
            break;
        }
        let roster: HashSet<Email> = roster.into_iter().collect();
        common.retain(|email| roster.contains(email));
    }

    common
}

/// Union of registered students and mentioned students, without duplicates.
///
/// Registered students come first; each email keeps its first position.
#[must_use]
pub fn merge_recipients<R, M>(registered: R, mentioned: M) -> Vec<Email>
where
    R: IntoIterator<Item = Email>,
    M: IntoIterator<Item = Email>,
{
    let mut seen = HashSet::new();
    registered
        .into_iter()
        .chain(mentioned)
        .filter(|email| seen.insert(email.clone()))
        .collect()
}
