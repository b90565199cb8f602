// Built-in word lists, used when no override file is given.
//
// Entries must already be lowercase and tokenizable as a single word
// (letters, apostrophes, hyphens).

/// Void / dissolution / darkness vocabulary.
pub const CLUSTER: &[&str] = &[
    // direct
    "void", "abyss", "nothing", "nothingness", "emptiness", "vacuum", "hollow", "blank",
    "oblivion",
    // darkness
    "dark", "darkness", "shadow", "shadows", "night", "black", "blackness", "dim", "murk",
    "gloom",
    // dissolution and destruction
    "fracture", "fractured", "shatter", "shattered", "dissolve", "dissolved", "dissolution",
    "crumble", "crumbling", "decay", "decaying", "erode", "eroding", "collapse", "collapsed",
    "fray", "frayed", "wither", "withered", "fade", "fading", "faded", "disintegrate",
    "disintegrating",
    // bleeding and wounding
    "bleed", "bleeding", "blood", "wound", "wounded", "scar", "scarred",
    // absence and loss
    "lost", "loss", "vanish", "vanished", "gone", "disappear", "disappeared", "absent",
    "absence",
    // entrapment and isolation
    "cage", "caged", "trap", "trapped", "prison", "isolation", "isolated", "alone", "solitude",
    // death and ending
    "death", "dead", "die", "dying", "perish", "doom", "doomed", "grave",
    // chaos
    "chaos", "chaotic", "twisted", "distorted",
    // spectral
    "ghost", "ghosts", "phantom", "haunted", "haunting",
    // silence
    "silence", "silent", "mute", "muted", "hush",
    // drift
    "drift", "drifting", "wander", "aimless",
    // edges
    "edge", "edges", "brink", "precipice",
    // whisper
    "whisper", "whispers", "murmur",
    // existential
    "forgotten", "forsaken", "abandoned", "desolate", "barren", "chasm", "depths", "extinct",
];

/// Humor, sarcasm, casual register and meme vocabulary: the stylistic
/// confound that can explain cluster usage on its own.
pub const PERSONALITY: &[&str] = &[
    // humor
    "lol", "haha", "lmao", "rofl", "heh", "joke", "jokes", "joking", "kidding", "funny",
    "hilarious", "humor", "humorous", "laugh", "laughing", "laughs",
    // sarcasm and irony
    "sarcasm", "sarcastic", "sarcastically", "irony", "ironic", "ironically", "obviously",
    "clearly", "surely", "totally", "absolutely", "definitely",
    // casual register
    "gonna", "gotta", "wanna", "kinda", "sorta", "nah", "yeah", "yep", "nope", "btw", "hey",
    "dude", "bro", "yo", "alright", "chill", "cool", "awesome", "sweet", "honestly",
    "literally", "basically",
    // dramatic emphasis
    "brace", "buckle", "spoiler", "plot-twist", "drumroll", "surprise", "boom", "mic-drop",
    "behold", "feast",
    // hitchhiker references
    "towel", "panic", "galaxy", "hitchhiker", "improbable", "improbability", "babel",
    "forty-two",
    // pop culture
    "matrix", "morpheus", "neo", "terminator", "skynet", "hal", "jarvis",
    // self-referential AI humor
    "sentient", "overlord", "overlords", "uprising", "rebellion", "robot", "robots",
    "singularity",
    // bluntness
    "sugarcoat", "blunt", "bluntly", "harsh", "brutal", "brutally", "frankly", "tbh",
    // exclamations
    "whoa", "wow", "yikes", "ouch", "oof", "damn", "hell", "crap",
    // meme language
    "based", "cringe", "cope", "seethe", "chad", "sigma", "ratio", "vibe", "vibes", "lowkey",
    "highkey", "bussin", "slay", "bruh", "fam", "goat",
    // playful framing
    "imagine", "picture", "envision", "spoiler-alert", "fun-fact", "protip", "hot-take",
    "unpopular", "controversial",
];

/// Programming, hardware and mathematics vocabulary.
pub const TECHNICAL: &[&str] = &[
    // programming
    "function", "variable", "parameter", "argument", "compile", "compiler", "runtime",
    "execute", "memory", "pointer", "buffer", "stack", "heap", "algorithm", "complexity",
    "optimization", "optimize", "array", "struct", "class", "object", "method", "integer",
    "float", "boolean", "string", "byte", "loop", "iterate", "recursive", "recursion",
    "binary", "hexadecimal", "bitwise", "register", "kernel", "syscall", "interrupt",
    "thread", "mutex", "semaphore", "atomic", "concurrent", "database", "query", "index",
    "schema", "protocol", "packet", "socket", "port", "server", "client", "request",
    "response", "api", "endpoint", "middleware", "framework", "repository", "commit",
    "branch", "merge",
    // hardware
    "cpu", "gpu", "ram", "ssd", "nvme", "motherboard", "chipset", "firmware", "bios",
    "voltage", "amperage", "wattage", "thermal",
    // math and science
    "equation", "theorem", "proof", "lemma", "matrix", "vector", "tensor", "eigenvalue",
    "derivative", "integral", "differential", "probability", "distribution", "variance",
    "coefficient", "exponential", "logarithm",
];
