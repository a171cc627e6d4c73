pub struct QuizSource {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: usize,
}

pub const QUIZ: &[QuizSource] = &[
    QuizSource {
        prompt: "¿Cómo se dice \"Para aquí o para llevar?\"",
        options: &["For now or for later?", "Here or to go?", "For here or to go?"],
        answer: 2,
    },
    QuizSource {
        prompt: "Un cliente te dice \"Good morning\". ¿Qué le respondes?",
        options: &["Good afternoon", "Good morning", "How are you?"],
        answer: 1,
    },
    QuizSource {
        prompt: "Si un cliente pide \"a large coffee\", ¿qué significa?",
        options: &["Un café pequeño", "Un café sin azúcar", "Un café grande"],
        answer: 2,
    },
    QuizSource {
        prompt: "Para preguntar si quiere algo más, dices:",
        options: &["Is there anything else?", "Anything else?", "That's all?"],
        answer: 1,
    },
];
