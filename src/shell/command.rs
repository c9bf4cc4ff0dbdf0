use thiserror::Error;

use crate::record::MESSAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append {
        aux: bool,
        filename: String,
        message: String,
    },
    Dump {
        filename: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Not a valid command.")]
    UnknownCommand,
    #[error("Don't enter same command twice!!")]
    DuplicateFlag,
    #[error("Don't follow the {flag} command with another command!!")]
    FlagFollowedByFlag { flag: &'static str },
    #[error(
        "Please enter the -t command after you have entered the filename or the optional Aux flag command."
    )]
    MessageBeforeFlags,
    #[error("Nothing entered after -t command!")]
    EmptyMessage,
    #[error("Text message is greater than 30 bytes. Records take max 30 byte messages.")]
    MessageTooLong,
    #[error("Filename not specified!")]
    MissingFilename,
}

pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens = tokenize(line);
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(None);
    };
    match head {
        "appendlog" => parse_append(args).map(Some),
        "dumplog" => parse_dump(args).map(Some),
        _ => Err(CommandError::UnknownCommand),
    }
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|t| !t.is_empty()).collect()
}

fn is_flag(token: &str) -> bool {
    matches!(token, "[-a]" | "-a" | "-f" | "-t")
}

fn is_aux(token: &str) -> bool {
    matches!(token, "[-a]" | "-a")
}

fn parse_append(args: &[&str]) -> Result<Command, CommandError> {
    let aux_count = args.iter().filter(|t| is_aux(t)).count();
    let f_count = args.iter().filter(|&&t| t == "-f").count();
    let t_count = args.iter().filter(|&&t| t == "-t").count();
    if aux_count > 1 || f_count > 1 || t_count > 1 {
        return Err(CommandError::DuplicateFlag);
    }

    // -t must come after every -f and aux token on the line.
    let last_flag_pos = args.iter().rposition(|&t| is_aux(t) || t == "-f");

    let mut aux = false;
    let mut filename: Option<String> = None;
    let mut message: Option<String> = None;

    let mut pos = 0;
    while pos < args.len() {
        let token = args[pos];
        if is_aux(token) {
            aux = true;
        } else if token == "-f" {
            match args.get(pos + 1) {
                Some(&next) if is_flag(next) => {
                    return Err(CommandError::FlagFollowedByFlag { flag: "-f" });
                }
                Some(&next) => {
                    filename = Some(next.to_string());
                    pos += 1;
                }
                None => {}
            }
        } else if token == "-t" {
            match args.get(pos + 1) {
                None => return Err(CommandError::EmptyMessage),
                Some(&next) if is_flag(next) => {
                    return Err(CommandError::FlagFollowedByFlag { flag: "-t" });
                }
                Some(_) => {}
            }
            if last_flag_pos.is_some_and(|flag_pos| pos < flag_pos) {
                return Err(CommandError::MessageBeforeFlags);
            }
            let joined = args[pos + 1..].join(" ");
            if joined.len() > MESSAGE_SIZE {
                return Err(CommandError::MessageTooLong);
            }
            message = Some(joined);
            break;
        }
        pos += 1;
    }

    let Some(filename) = filename else {
        return Err(CommandError::MissingFilename);
    };
    Ok(Command::Append {
        aux,
        filename,
        message: message.unwrap_or_default(),
    })
}

fn parse_dump(args: &[&str]) -> Result<Command, CommandError> {
    if args.iter().filter(|&&t| t == "-f").count() > 1 {
        return Err(CommandError::DuplicateFlag);
    }

    let mut filename: Option<String> = None;
    for (pos, &token) in args.iter().enumerate() {
        if token == "-f" {
            match args.get(pos + 1) {
                Some(&next) if is_flag(next) => {
                    return Err(CommandError::FlagFollowedByFlag { flag: "-f" });
                }
                Some(&next) => filename = Some(next.to_string()),
                None => {}
            }
        }
    }

    match filename {
        Some(filename) => Ok(Command::Dump { filename }),
        None => Err(CommandError::MissingFilename),
    }
}
