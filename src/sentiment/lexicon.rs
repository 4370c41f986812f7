//! Weighted financial sentiment lexicon.
//!
//! Each term maps to a score in [-1, 1]; positive is bullish. Multi-word
//! phrases are matched before single tokens so "beat estimates" outweighs
//! a bare "beat". The weights are heuristics, not fitted values.

/// Multi-word phrases, matched against the lowercased text as substrings.
pub const PHRASES: &[(&str, f64)] = &[
    ("all-time high", 0.85),
    ("record high", 0.8),
    ("beat estimates", 0.75),
    ("beats estimates", 0.75),
    ("earnings beat", 0.75),
    ("revenue growth", 0.7),
    ("raised guidance", 0.7),
    ("rate cut", 0.5),
    ("share buyback", 0.5),
    ("bear market", -0.8),
    ("missed estimates", -0.7),
    ("earnings miss", -0.7),
    ("disappointing guidance", -0.7),
    ("lowered guidance", -0.65),
    ("profit warning", -0.7),
    ("rate hike", -0.45),
    ("rate increase", -0.4),
    ("sell-off", -0.7),
    ("short seller", -0.45),
    ("chapter 11", -0.9),
];

/// Single-word terms, matched on token boundaries.
pub const TERMS: &[(&str, f64)] = &[
    // strong positive
    ("soar", 0.9),
    ("soars", 0.9),
    ("soared", 0.9),
    ("soaring", 0.9),
    ("surge", 0.85),
    ("surges", 0.85),
    ("surged", 0.85),
    ("surging", 0.85),
    ("skyrocket", 0.9),
    ("skyrockets", 0.9),
    ("skyrocketed", 0.9),
    ("rally", 0.8),
    ("rallies", 0.8),
    ("rallied", 0.8),
    ("rallying", 0.8),
    ("boom", 0.8),
    ("booming", 0.8),
    ("breakout", 0.75),
    ("breakthrough", 0.8),
    ("bullish", 0.75),
    ("outperform", 0.7),
    ("outperforms", 0.7),
    ("outperformed", 0.7),
    ("upgrade", 0.7),
    ("upgraded", 0.7),
    ("upgrades", 0.7),
    ("beat", 0.65),
    ("beats", 0.65),
    ("beating", 0.65),
    ("exceed", 0.65),
    ("exceeds", 0.65),
    ("exceeded", 0.65),
    ("record", 0.6),
    ("jump", 0.6),
    ("jumps", 0.6),
    ("jumped", 0.6),
    ("jumping", 0.6),
    ("profit", 0.6),
    ("profits", 0.6),
    ("profitable", 0.65),
    ("optimistic", 0.6),
    ("optimism", 0.6),
    ("accelerate", 0.6),
    ("accelerates", 0.6),
    ("accelerating", 0.6),
    ("gain", 0.55),
    ("gains", 0.55),
    ("gained", 0.55),
    ("gaining", 0.55),
    ("boost", 0.55),
    ("boosts", 0.55),
    ("boosted", 0.55),
    ("upbeat", 0.55),
    ("robust", 0.55),
    ("success", 0.55),
    ("successful", 0.55),
    ("approved", 0.55),
    ("recovery", 0.55),
    // moderate positive
    ("strong", 0.5),
    ("strength", 0.5),
    ("rise", 0.5),
    ("rises", 0.5),
    ("rising", 0.5),
    ("climb", 0.5),
    ("climbs", 0.5),
    ("climbed", 0.5),
    ("growth", 0.5),
    ("momentum", 0.5),
    ("win", 0.5),
    ("wins", 0.5),
    ("winning", 0.5),
    ("buyback", 0.5),
    ("recover", 0.5),
    ("recovers", 0.5),
    ("recovering", 0.5),
    ("approval", 0.5),
    ("expansion", 0.5),
    ("dovish", 0.4),
    ("stimulus", 0.45),
    ("easing", 0.4),
    ("improve", 0.4),
    ("improves", 0.4),
    ("improved", 0.4),
    ("improving", 0.4),
    ("partnership", 0.4),
    ("acquisition", 0.4),
    ("acquires", 0.4),
    ("demand", 0.4),
    ("positive", 0.4),
    ("dividend", 0.4),
    ("confident", 0.4),
    ("confidence", 0.4),
    ("grew", 0.45),
    ("growing", 0.45),
    ("expands", 0.45),
    ("expanding", 0.45),
    ("increase", 0.35),
    ("increases", 0.35),
    ("increased", 0.35),
    ("increasing", 0.35),
    ("launch", 0.35),
    ("launches", 0.35),
    ("launched", 0.35),
    ("merger", 0.35),
    ("higher", 0.35),
    ("resilient", 0.35),
    ("resilience", 0.35),
    ("up", 0.3),
    ("stable", 0.25),
    ("steady", 0.25),
    // strong negative
    ("bankruptcy", -0.95),
    ("bankrupt", -0.95),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("crashed", -0.9),
    ("crashing", -0.9),
    ("fraud", -0.9),
    ("plunge", -0.85),
    ("plunges", -0.85),
    ("plunged", -0.85),
    ("plunging", -0.85),
    ("plummet", -0.85),
    ("plummets", -0.85),
    ("plummeted", -0.85),
    ("collapse", -0.85),
    ("collapses", -0.85),
    ("collapsed", -0.85),
    ("tank", -0.8),
    ("tanks", -0.8),
    ("tanked", -0.8),
    ("scandal", -0.8),
    ("default", -0.8),
    ("defaults", -0.8),
    ("tumble", -0.75),
    ("tumbles", -0.75),
    ("tumbled", -0.75),
    ("bearish", -0.75),
    ("recession", -0.75),
    ("selloff", -0.7),
    ("downgrade", -0.7),
    ("downgraded", -0.7),
    ("downgrades", -0.7),
    ("layoffs", -0.65),
    ("layoff", -0.6),
    ("sink", -0.6),
    ("sinks", -0.6),
    ("sank", -0.6),
    ("sinking", -0.6),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("slumped", -0.6),
    // moderate negative
    ("loss", -0.55),
    ("losses", -0.55),
    ("miss", -0.55),
    ("misses", -0.55),
    ("missed", -0.55),
    ("lawsuit", -0.55),
    ("sued", -0.55),
    ("overvalued", -0.55),
    ("shutdown", -0.55),
    ("disappoint", -0.55),
    ("disappoints", -0.55),
    ("disappointed", -0.55),
    ("disappointing", -0.55),
    ("underperform", -0.55),
    ("underperforms", -0.55),
    ("underperformed", -0.55),
    ("decline", -0.5),
    ("declines", -0.5),
    ("declined", -0.5),
    ("declining", -0.5),
    ("drop", -0.5),
    ("drops", -0.5),
    ("dropped", -0.5),
    ("dropping", -0.5),
    ("fall", -0.5),
    ("falls", -0.5),
    ("fell", -0.5),
    ("falling", -0.5),
    ("slide", -0.5),
    ("slides", -0.5),
    ("slid", -0.5),
    ("warning", -0.5),
    ("warn", -0.5),
    ("warns", -0.5),
    ("warned", -0.5),
    ("investigation", -0.5),
    ("litigation", -0.5),
    ("penalty", -0.5),
    ("fined", -0.5),
    ("recall", -0.5),
    ("recalls", -0.5),
    ("recalled", -0.5),
    ("shrink", -0.5),
    ("shrinks", -0.5),
    ("shrank", -0.5),
    ("fear", -0.45),
    ("fears", -0.45),
    ("weak", -0.45),
    ("weakness", -0.45),
    ("weaken", -0.45),
    ("sanctions", -0.45),
    ("struggle", -0.45),
    ("struggles", -0.45),
    ("struggling", -0.45),
    ("fine", -0.45),
    ("hawkish", -0.4),
    ("cut", -0.4),
    ("cuts", -0.4),
    ("cutting", -0.4),
    ("uncertainty", -0.4),
    ("uncertain", -0.4),
    ("tariff", -0.4),
    ("tariffs", -0.4),
    ("shortage", -0.4),
    ("shortages", -0.4),
    ("negative", -0.4),
    ("concern", -0.35),
    ("concerns", -0.35),
    ("concerned", -0.35),
    ("volatile", -0.35),
    ("volatility", -0.35),
    ("inflation", -0.35),
    ("debt", -0.35),
    ("delay", -0.35),
    ("delayed", -0.35),
    ("delays", -0.35),
    ("tighten", -0.35),
    ("tightening", -0.35),
    ("lower", -0.35),
    ("risky", -0.35),
    ("risk", -0.3),
    ("risks", -0.3),
    ("down", -0.3),
    // near-neutral / context-dependent
    ("flat", -0.05),
    ("mixed", -0.05),
    ("maintain", 0.1),
    ("maintains", 0.1),
    ("announce", 0.1),
    ("announces", 0.1),
    ("announced", 0.1),
    ("expect", 0.1),
    ("expects", 0.1),
    ("expected", 0.05),
];

/// Tokens that flip the sign of the following sentiment term.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "nor", "cannot", "can't",
    "won't", "don't", "doesn't", "didn't", "wasn't", "weren't", "isn't", "aren't", "wouldn't",
    "shouldn't", "couldn't", "hardly", "barely", "scarcely", "fail", "fails", "failed", "failing",
];

/// Tokens that scale the following sentiment term.
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("significantly", 1.4),
    ("sharply", 1.4),
    ("dramatically", 1.5),
    ("massively", 1.5),
    ("strongly", 1.3),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("substantially", 1.3),
    ("considerably", 1.25),
    ("slightly", 0.6),
    ("marginally", 0.5),
    ("somewhat", 0.7),
    ("modestly", 0.7),
];

pub fn term_weight(token: &str) -> Option<f64> {
    TERMS
        .iter()
        .find(|(term, _)| *term == token)
        .map(|(_, weight)| *weight)
}

pub fn intensifier_factor(token: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(term, _)| *term == token)
        .map(|(_, factor)| *factor)
}

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}
