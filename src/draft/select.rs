// src/draft/select.rs

//! Read-modify-write helpers for the selection lists. The store only offers
//! whole-list setters; these compute the next list for a checkbox toggle.

pub fn is_selected(list: &[String], id: &str) -> bool {
    list.iter().any(|x| x == id)
}

/// Appends `id` if absent, drops every occurrence if present.
pub fn toggled(list: &[String], id: &str) -> Vec<String> {
    if is_selected(list, id) {
        list.iter().filter(|x| x.as_str() != id).cloned().collect()
    } else {
        let mut out = list.to_vec();
        out.push(id.to_string());
        out
    }
}
