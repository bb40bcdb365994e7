//! Internal implementation for the region patcher

use super::{PatchOutcome, PatchRequest, RegionError};

/// Text strictly between the first `start` and the first `end` after it
pub fn extract_region<'a>(
    document: &'a str,
    start: &str,
    end: &str,
) -> Result<&'a str, RegionError> {
    let open = document
        .find(start)
        .ok_or_else(|| RegionError::MarkerNotFound {
            marker: start.to_string(),
        })?;
    let body = open + start.len();

    match document[body..].find(end) {
        Some(len) => Ok(&document[body..body + len]),
        None if document.contains(end) => Err(RegionError::RegionMalformed {
            start: start.to_string(),
            end: end.to_string(),
        }),
        None => Err(RegionError::MarkerNotFound {
            marker: end.to_string(),
        }),
    }
}

/// Exact substring match
pub fn contains_entry(region: &str, entry: &str) -> bool {
    region.contains(entry)
}

/// Whitespace immediately preceding the first `token` in the region
///
/// Returns `None` when the token never occurs, i.e. there is no entry whose
/// formatting could be mirrored.
pub fn detect_indentation<'a>(region: &'a str, token: &str) -> Option<&'a str> {
    let before = &region[..region.find(token)?];
    let content = before.trim_end();
    Some(&before[content.len()..])
}

/// Append `indent + entry + separator` right after the last separator
///
/// A region without any separator comes back unchanged.
pub fn insert_entry(region: &str, entry: &str, indent: &str, separator: &str) -> String {
    let Some(last) = region.rfind(separator) else {
        return region.to_string();
    };
    let at = last + separator.len();

    let mut patched =
        String::with_capacity(region.len() + indent.len() + entry.len() + separator.len());
    patched.push_str(&region[..at]);
    patched.push_str(indent);
    patched.push_str(entry);
    patched.push_str(separator);
    patched.push_str(&region[at..]);
    patched
}

/// Replace the last occurrence of `original` in `document`
pub fn splice_region(document: &str, original: &str, replacement: &str) -> String {
    if original.is_empty() {
        return document.to_string();
    }
    match document.rfind(original) {
        Some(at) => {
            let mut spliced =
                String::with_capacity(document.len() - original.len() + replacement.len());
            spliced.push_str(&document[..at]);
            spliced.push_str(replacement);
            spliced.push_str(&document[at + original.len()..]);
            spliced
        }
        None => document.to_string(),
    }
}

pub fn patch(document: &str, request: &PatchRequest) -> PatchOutcome {
    // Outermost first; every region borrows from `document`
    let mut regions = Vec::with_capacity(request.path.len());
    let mut scope = document;
    for markers in &request.path {
        match extract_region(scope, &markers.start, &markers.end) {
            Ok(region) => {
                regions.push(region);
                scope = region;
            }
            Err(err) => return PatchOutcome::Skipped(err),
        }
    }

    let target = scope;
    if contains_entry(target, &request.entry) {
        return PatchOutcome::AlreadyPresent;
    }

    let Some(indent) = detect_indentation(target, &request.token) else {
        return PatchOutcome::Skipped(RegionError::NoExistingEntry {
            token: request.token.clone(),
        });
    };
    if !target.contains(request.separator.as_str()) {
        return PatchOutcome::Skipped(RegionError::NoSeparator {
            separator: request.separator.clone(),
        });
    }

    let mut original = target;
    let mut replacement = insert_entry(target, &request.entry, indent, &request.separator);

    // Splice back outward: innermost region into its parent, up to the document
    for &parent in regions.iter().rev().skip(1).chain(std::iter::once(&document)) {
        replacement = splice_into(parent, original, &replacement);
        original = parent;
    }

    PatchOutcome::Patched(replacement)
}

/// Splice `region`, a subslice of `parent`, back into `parent`
///
/// The last-occurrence search is bounded by the end of `region`, so an
/// identical block after it is never the one replaced.
fn splice_into(parent: &str, region: &str, replacement: &str) -> String {
    let end = region.as_ptr() as usize - parent.as_ptr() as usize + region.len();
    let mut spliced = splice_region(&parent[..end], region, replacement);
    spliced.push_str(&parent[end..]);
    spliced
}
