//! Terminal rendering of the three screens.

use std::collections::HashMap;

use crate::app::App;

const BAR_WIDTH: usize = 30;

pub fn render_login() -> String {
    "Voting App Login\nEnter your name: ".to_string()
}

pub fn render_vote_page(app: &App) -> String {
    let mut out = format!(
        "\nWelcome, {}!\nPlease enter your vote.\n\n",
        app.display_name
    );

    for (index, option) in app.options().iter().enumerate() {
        out.push_str(&format!("  [{}] {option}\n", index + 1));
    }

    if app.has_voted {
        out.push_str("\nThank you for giving the vote!\n");
    }

    out.push_str("\n[number] vote  [r] view results  [q] quit\n> ");

    out
}

pub fn render_results(app: &App) -> String {
    let mut out = String::from("\nVoting Results\n\n");

    if app.tallies.is_empty() {
        out.push_str("No one has voted.\n");
    } else {
        let total: u32 = app.tallies.values().sum();

        for (option, count) in sorted_descending(&app.tallies) {
            let share = percentage(count, total);
            out.push_str(&format!("{option}  {count} Votes\n"));
            out.push_str(&format!("[{}] {share:.1}%\n", bar(share)));
        }

        out.push_str(&format!("\nTotal votes: {total}\n"));
    }

    let refresh = if app.is_loading {
        "Refreshing..."
    } else {
        "[r] refresh"
    };
    out.push_str(&format!("\n[b] go back  {refresh}  [q] quit\n> "));

    out
}

/// Highest tally first; ties break alphabetically so re-renders are stable.
pub fn sorted_descending(tallies: &HashMap<String, u32>) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = tallies
        .iter()
        .map(|(option, count)| (option.as_str(), *count))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    entries
}

pub fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (count as f64 / total as f64) * 100.0
}

fn bar(share: f64) -> String {
    let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;

    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use std::collections::HashMap;

    fn app_with(tallies: &[(&str, u32)]) -> App {
        let mut app = App::new();
        app.login("Ada");
        app.set_tallies(
            tallies
                .iter()
                .map(|(option, count)| (option.to_string(), *count))
                .collect(),
        );

        app
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_percentage_basic() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 3), 100.0);
    }

    #[test]
    fn test_sorted_descending_with_alphabetical_ties() {
        let tallies = HashMap::from([
            ("Option B".to_string(), 2),
            ("Option C".to_string(), 5),
            ("Option A".to_string(), 2),
        ]);

        let sorted = sorted_descending(&tallies);

        assert_eq!(
            sorted,
            vec![("Option C", 5), ("Option A", 2), ("Option B", 2)]
        );
    }

    #[test]
    fn test_results_show_counts_and_total() {
        let app = app_with(&[("Option A", 3), ("Option B", 1)]);

        let out = render_results(&app);

        assert!(out.contains("Option A  3 Votes"));
        assert!(out.contains("75.0%"));
        assert!(out.contains("Total votes: 4"));
    }

    #[test]
    fn test_empty_results_notice() {
        let app = app_with(&[]);

        let out = render_results(&app);

        assert!(out.contains("No one has voted."));
        assert!(!out.contains("Total votes"));
    }

    #[test]
    fn test_loading_hides_refresh() {
        let mut app = app_with(&[("Option A", 1)]);
        app.is_loading = true;

        let out = render_results(&app);

        assert!(out.contains("Refreshing..."));
        assert!(!out.contains("[r] refresh"));
    }

    #[test]
    fn test_vote_page_lists_options_and_thanks_voters() {
        let mut app = app_with(&[("Option A", 0), ("Option B", 0)]);

        let out = render_vote_page(&app);
        assert!(out.contains("Welcome, Ada!"));
        assert!(out.contains("[1] Option A"));
        assert!(out.contains("[2] Option B"));
        assert!(!out.contains("Thank you"));

        app.mark_voted();
        let out = render_vote_page(&app);
        assert!(out.contains("Thank you for giving the vote!"));
    }
}
