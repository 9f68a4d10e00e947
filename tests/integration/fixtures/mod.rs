// Transcript fixtures shared by the integration tests

/// Screenplay excerpt: speaker cues in capitals, bracketed stage directions,
/// dialogue wrapped over several physical lines.
pub const SCREENPLAY: &str = "\
[INT. KITCHEN - NIGHT]
ALICE: Did you hear that?
It came from the cellar.
BOB: Probably the cat.
[A door slams]
ALICE: We don't have a cat.
BOB: Then it's the neighbour's cat,
wandering in again,
like last winter.";

/// Chat log with timestamps in front of every message.
pub const CHAT_LOG: &str = "\
[09:00] mallory> morning all
[09:01] trent> morning
[09:01] mallory> has anyone seen the build logs?
they were here yesterday
[09:05] trent> check the artifacts page";
