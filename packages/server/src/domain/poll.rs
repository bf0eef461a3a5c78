//! Pure vote-toggling logic for poll messages.
//!
//! No side effects: the caller commits the returned message to the log and
//! broadcasts it.

use super::entity::{Message, PollOption};

/// Toggle an actor's vote on a poll option, producing a new message value.
///
/// Every prior vote by the actor is removed first, which is what enforces
/// single-choice voting. The actor is then added to the target option,
/// unless they were already a voter there; in that case the net effect is
/// retracting the vote.
///
/// Clicking the option you voted for removes your vote; clicking a
/// different option moves your vote. Non-poll messages are returned
/// unchanged.
pub fn toggle_vote(message: &Message, option_id: &str, actor: &str) -> Message {
    let Some(options) = &message.poll_options else {
        return message.clone();
    };

    let updated: Vec<PollOption> = options
        .iter()
        .map(|option| {
            let had_voted = option.votes.iter().any(|v| v == actor);
            let mut votes: Vec<String> = option
                .votes
                .iter()
                .filter(|v| v.as_str() != actor)
                .cloned()
                .collect();
            if option.id == option_id && !had_voted {
                votes.push(actor.to_string());
            }
            PollOption {
                id: option.id.clone(),
                text: option.text.clone(),
                votes,
            }
        })
        .collect();

    Message {
        poll_options: Some(updated),
        ..message.clone()
    }
}
