use crate::utils::config::{REPORT_VERSION, VERB_TABLE};

/// Verb reference table
pub fn display_verbs() -> String {
    let mut out = String::from("verb  description     example\n");
    for (verb, description, example) in VERB_TABLE {
        out.push_str(&format!("{:<5} {:<15} {}\n", verb, description, example));
    }
    out.push_str("\nStacks render as [frame frame ...]; unknown verbs render nothing.\n");
    out
}

/// Version information
pub fn display_version() -> String {
    format!(
        "caller-trace v{}\nReport Schema: v{}\n",
        env!("CARGO_PKG_VERSION"),
        REPORT_VERSION
    )
}
