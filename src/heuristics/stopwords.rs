use once_cell::sync::Lazy;
use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
    "done", "down", "due", "during", "each", "eg", "either", "else", "elsewhere", "enough",
    "etc", "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "for", "former", "formerly", "from", "further", "get", "gets", "got", "had", "has", "have",
    "having", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hers", "herself",
    "him", "himself", "his", "how", "however", "i", "ie", "if", "in", "indeed", "into", "is",
    "it", "its", "itself", "just", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless",
    "next", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "put",
    "rather", "re", "really", "same", "see", "seem", "seemed", "seeming", "seems", "several",
    "she", "should", "since", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
    "thereupon", "these", "they", "this", "those", "though", "through", "throughout", "thru",
    "thus", "to", "together", "too", "toward", "towards", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves", "it's", "i'm", "i've", "i'd", "i'll", "you're", "we're", "they're", "that's",
    "there's", "don't", "doesn't", "didn't", "isn't", "wasn't", "can't", "won't",
];

// Words that open a noun phrase rather than break one.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "our", "your", "their", "his",
    "her", "its", "every", "each", "some", "any", "no",
];

// Verb forms that close a noun phrase. Forms that double as nouns ("use",
// "work", "looks") are left out so "great work" stays a phrase.
const VERBS: &[&str] = &[
    "love", "loves", "loved", "loving", "adore", "adores", "adored", "recommend",
    "recommends", "recommended", "recommending", "like", "likes", "liked", "hate", "hates",
    "hated", "enjoy", "enjoys", "enjoyed", "prefer", "prefers", "preferred", "buy", "buys",
    "bought", "buying", "purchased", "ordered", "break", "breaks", "broke", "feel", "feels",
    "felt", "think", "thinks", "thought", "know", "knows", "knew", "want", "wants", "wanted",
    "need", "needs", "needed", "try", "tries", "tried", "trying", "say", "says", "said",
    "tell", "tells", "told", "make", "makes", "making", "go", "goes", "went", "going",
    "come", "comes", "came", "take", "takes", "took", "give", "gives", "gave", "find",
    "finds", "found", "lasts", "lasted", "arrived", "worked", "drains", "looked", "sounded",
    "switched", "returned", "stopped", "started", "keeps", "kept", "lets",
];

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH.iter().copied().collect());
static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| VERBS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

pub fn is_verb(word: &str) -> bool {
    VERB_SET.contains(word)
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(&word)
}
