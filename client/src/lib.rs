//! Terminal client for the voting service.
//!
//! Three screens: login, vote, results. Entering the vote or results screen
//! re-fetches the tallies; voting disables further votes for this client
//! only, since the server tracks no identity.

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod api;
pub mod app;
pub mod view;

use api::ApiClient;
use app::{App, Page};

pub async fn run(api_url: String) -> Result<()> {
    let api = ApiClient::new(&api_url);
    let mut app = App::new();

    refresh(&api, &mut app).await;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let screen = match app.page {
            Page::Login => view::render_login(),
            Page::Vote => view::render_vote_page(&app),
            Page::Results => view::render_results(&app),
        };
        print!("{screen}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        let input = input.trim();

        match app.page {
            Page::Login => {
                if !app.login(input) {
                    println!("Please enter a name.");
                    continue;
                }
                refresh(&api, &mut app).await;
            }
            Page::Vote => match input {
                "q" => break,
                "r" => {
                    app.show_results();
                    refresh(&api, &mut app).await;
                }
                _ => cast_vote(&api, &mut app, input).await,
            },
            Page::Results => match input {
                "q" => break,
                "b" => {
                    app.back_to_vote();
                    refresh(&api, &mut app).await;
                }
                "r" => refresh(&api, &mut app).await,
                _ => {}
            },
        }
    }

    Ok(())
}

async fn cast_vote(api: &ApiClient, app: &mut App, input: &str) {
    let options = app.options();

    let Some(option) = input
        .parse::<usize>()
        .ok()
        .and_then(|choice| options.get(choice.wrapping_sub(1)))
    else {
        println!("Unknown choice: {input}");
        return;
    };

    if !app.can_vote() {
        println!("You have already voted.");
        return;
    }

    match api.submit_vote(option).await {
        Ok(message) => {
            println!("{message}");
            app.mark_voted();
            refresh(api, app).await;
        }
        Err(e) => eprintln!("Error in casting votes: {e}"),
    }
}

async fn refresh(api: &ApiClient, app: &mut App) {
    app.is_loading = true;

    match api.fetch_votes().await {
        Ok(tallies) => app.set_tallies(tallies),
        Err(e) => {
            app.is_loading = false;
            eprintln!("Error in fetching votes: {e}");
        }
    }
}
