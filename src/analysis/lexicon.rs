//! Word lists backing `LexiconAnnotator`. All entries are lowercase.

/// Function words, auxiliaries and filler that never carry an idea.
pub const STOPWORDS: &[&str] = &[
    // Pronouns / determiners
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "mine", "yours", "ours", "theirs", "a", "an", "the", "this", "that", "these", "those", "there", "here",
    "someone", "something", "anyone", "anything", "everyone", "everything", "nothing", "itself", "ourselves",
    // Auxiliaries / modals
    "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "done", "have", "has", "had",
    "having", "will", "would", "can", "could", "should", "may", "might", "must", "shall", "ought", "get", "got",
    "gets", "let", "lets",
    // Contractions
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "won't", "can't", "couldn't",
    "shouldn't", "wouldn't", "i'm", "we're", "they're", "you're", "it's", "that's", "let's", "we'll", "we've",
    // Conjunctions / prepositions
    "and", "or", "but", "nor", "so", "yet", "if", "then", "else", "because", "while", "until", "unless",
    "although", "though", "whether", "to", "of", "in", "on", "for", "with", "at", "by", "from", "about", "into",
    "onto", "over", "under", "through", "between", "after", "before", "during", "without", "within", "across",
    "via", "per", "than", "as", "up", "down", "out", "off", "against", "among", "around", "toward", "towards",
    "upon",
    // Question words
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how",
    // Quantifiers / adverbs
    "not", "no", "yes", "all", "any", "each", "every", "some", "more", "most", "less", "least", "few", "many",
    "much", "very", "just", "also", "too", "only", "own", "same", "such", "other", "another", "again", "once",
    "ever", "never", "always", "often", "sometimes", "really", "maybe", "perhaps", "still", "even", "now", "next",
    "soon", "already", "well", "like", "etc",
    // Discourse / fillers
    "ok", "okay", "hi", "hello", "thanks", "thank", "please", "note", "btw", "fyi", "yeah", "yep", "nope", "idea",
    "ideas", "thing", "things", "stuff", "lot", "lots",
    // Time words
    "today", "yesterday", "tomorrow", "tonight",
];

/// Base forms of action verbs. Inflections (`-s`, `-es`, `-ed`, `-ing`,
/// `-ies`, `-ied`, doubled final consonant) resolve to these.
pub const BASE_VERBS: &[&str] = &[
    "accelerate", "add", "adopt", "align", "allow", "analyze", "analyse", "apply", "approve", "archive", "ask",
    "assess", "assign", "audit", "automate", "avoid", "boost", "build", "buy", "cache", "celebrate", "change",
    "check", "choose", "clarify", "clean", "collect", "combine", "communicate", "compare", "configure", "connect",
    "consolidate", "create", "cut", "decide", "define", "delete", "deliver", "deploy", "design", "develop",
    "discuss", "document", "draft", "drive", "drop", "eliminate", "enable", "encourage", "engage", "enhance",
    "ensure", "establish", "evaluate", "expand", "explore", "extend", "finalize", "find", "fix", "focus", "gather",
    "grow", "help", "hire", "host", "identify", "implement", "improve", "include", "increase", "install",
    "integrate", "introduce", "invest", "invite", "keep", "launch", "learn", "lower", "maintain", "make",
    "measure", "merge", "migrate", "minimize", "monitor", "move", "need", "notify", "offer", "optimize",
    "organize", "pilot", "plan", "prepare", "present", "prioritize", "promote", "prototype", "provide", "publish",
    "reduce", "refactor", "release", "remind", "remove", "rename", "replace", "report", "require", "research",
    "resolve", "restructure", "reuse", "review", "rewrite", "run", "save", "scale", "schedule", "send", "share",
    "ship", "show", "simplify", "speed", "standardize", "start", "stop", "streamline", "strengthen", "support",
    "survey", "switch", "sync", "teach", "test", "track", "train", "try", "update", "upgrade", "use", "validate",
    "verify", "want", "write",
];
