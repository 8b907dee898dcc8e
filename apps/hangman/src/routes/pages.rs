//! HTML pages for browser play.
//!
//! Every dynamic value goes through [`escape`]; nicknames are free text.

use std::fmt::Write;

use crate::domain::scoring::RoundOutcome;
use crate::domain::snapshot::SessionView;
use crate::repos::leaderboard::LeaderboardEntry;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
{body}</body>
</html>
"#
    )
}

/// Entry form posting `nickname` to `/`.
pub fn home() -> String {
    layout(
        "Hangman",
        r#"<h1>Hangman</h1>
<form method="post" action="/">
<label for="nickname">Nickname</label>
<input id="nickname" name="nickname" autofocus>
<button type="submit">Play</button>
</form>
<p><a href="/leaderboard">Leaderboard</a></p>
"#,
    )
}

/// Running round with the guess form.
pub fn play(view: &SessionView) -> String {
    let tried = if view.tried_letters.is_empty() {
        "none".to_string()
    } else {
        view.tried_letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<h1>Round {round}</h1>
<p class="player">{nickname}, score {score}</p>
<p class="pattern">{pattern}</p>
<p class="lives">Lives: {lives}/{max_lives}</p>
<p class="tried">Tried: {tried}</p>
<form method="post" action="/guess">
<label for="guess">Letter or word</label>
<input id="guess" name="guess" autocomplete="off" autofocus>
<button type="submit">Guess</button>
</form>
"#,
        round = view.round,
        nickname = escape(&view.nickname),
        score = view.score,
        pattern = escape(&view.pattern),
        lives = view.lives,
        max_lives = view.max_lives,
        tried = escape(&tried),
    );
    layout("Hangman", &body)
}

/// Result of a finished round.
///
/// A win offers the next word; a loss shows the recorded score and a way
/// back to the entry form.
pub fn end(outcome: &RoundOutcome) -> String {
    let word = escape(&outcome.revealed_word);
    let mut body = String::new();
    if outcome.won {
        let _ = write!(
            body,
            r#"<h1>Well done!</h1>
<p class="word">The word was <strong>{word}</strong>.</p>
<p class="score">Score: {score}</p>
<form method="post" action="/continue">
<button type="submit">Next word</button>
</form>
"#,
            score = outcome.final_score,
        );
    } else {
        let _ = write!(
            body,
            r#"<h1>Game over</h1>
<p class="word">The word was <strong>{word}</strong>.</p>
<p class="score">Final score {score} has been recorded.</p>
<p><a href="/">New game</a> | <a href="/leaderboard">Leaderboard</a></p>
"#,
            score = outcome.final_score,
        );
    }
    layout("Hangman", &body)
}

/// Leaderboard in insertion order.
pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    let mut body = String::from("<h1>Leaderboard</h1>\n");
    if entries.is_empty() {
        body.push_str("<p>No scores yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Nickname</th><th>Score</th></tr>\n");
        for entry in entries {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(&entry.nickname),
                entry.score
            );
        }
        body.push_str("</table>\n");
    }
    body.push_str("<p><a href=\"/\">Play</a></p>\n");
    layout("Leaderboard", &body)
}
