use std::str::FromStr;

/// One line typed at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartQuiz,
    Score,
    /// 0-based option index
    Select(usize),
    Convert(String),
    Listen,
    Stop,
    /// 0-based phrase card index
    Play(usize),
    /// Speak the current conversion suggestion
    Say,
    Copy,
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Comando desconocido: {0}")]
    Unknown(String),

    #[error("Falta el argumento para '{0}'")]
    MissingArgument(&'static str),

    #[error("Número inválido: {0}")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
Comandos:
  start            empezar (o reiniciar) la prueba
  select <n>       elegir la opción n
  score            ver el puntaje actual
  play <n>         escuchar la frase n
  convert <texto>  sugerir inglés para una frase en español
  say | copy       escuchar o copiar la sugerencia
  listen | stop    practicar pronunciación
  show             mostrar todo
  quit             salir";

fn ordinal(name: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }

    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "start" | "quiz" => Ok(Command::StartQuiz),
            "score" => Ok(Command::Score),
            "select" => ordinal("select", arg).map(Command::Select),
            "play" => ordinal("play", arg).map(Command::Play),
            "convert" => {
                if arg.is_empty() {
                    Err(CommandError::MissingArgument("convert"))
                } else {
                    Ok(Command::Convert(arg.to_string()))
                }
            }
            "listen" => Ok(Command::Listen),
            "stop" => Ok(Command::Stop),
            "say" => Ok(Command::Say),
            "copy" => Ok(Command::Copy),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => {
                // a bare number picks a quiz option
                if arg.is_empty() && word.parse::<usize>().is_ok() {
                    return ordinal("select", word).map(Command::Select);
                }
                Err(CommandError::Unknown(word.to_string()))
            }
        }
    }
}
