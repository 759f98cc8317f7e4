mod chat;
mod quiz;

use std::sync::Arc;

use chat::responder::Responder;
use dotenv::dotenv;
use teloxide::{
    dispatching::dialogue::InMemStorage,
    prelude::*,
    types::{ChatAction, ChatId, KeyboardButton, KeyboardMarkup},
};

type BotDialogue = Dialogue<State, InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Clone, Default)]
pub enum State {
    #[default]
    Start,
    ReceiveModeChoice {
        level: quiz::Level,
    },
    Quiz {
        session: quiz::Session,
        level: quiz::Level,
    },
    Chat {
        log: chat::MessageLog,
        level: quiz::Level,
    },
}

#[tokio::main]
async fn main() {
    dotenv().expect("Failed to load .env file");

    pretty_env_logger::init();
    log::info!("Starting SUPRIM training bot...");

    let bot = Bot::from_env();

    let responder = Arc::new(chat::script::suprim_responder());

    Dispatcher::builder(
        bot,
        Update::filter_message()
            .enter_dialogue::<Message, InMemStorage<State>, State>()
            .branch(dptree::case![State::Start].endpoint(start))
            .branch(dptree::case![State::ReceiveModeChoice { level }].endpoint(receive_mode_choice))
            .branch(dptree::case![State::Quiz { session, level }].endpoint(quiz_step))
            .branch(dptree::case![State::Chat { log, level }].endpoint(
                move |bot: Bot,
                      dialogue: BotDialogue,
                      (log, level): (chat::MessageLog, quiz::Level),
                      msg: Message| {
                    chat_message(responder.clone(), bot, dialogue, (log, level), msg)
                },
            )),
    )
    .dependencies(dptree::deps![InMemStorage::<State>::new()])
    .enable_ctrlc_handler()
    .build()
    .dispatch()
    .await;
}

const WELCOME_TEXT: &str = "Добро пожаловать! Я обучающий помощник по системе СУПРИМ. Пройдите тест, чтобы определить свой уровень, или задайте вопрос в чате поддержки.";
const START_QUIZ_BUTTON: &str = "Пройти тест уровня";
const OPEN_CHAT_BUTTON: &str = "Чат с помощником";
const MENU_BUTTON: &str = "Вернуться в меню";

async fn start(bot: Bot, dialogue: BotDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;

    let level = quiz::Level::default();
    send_menu(&bot, msg.chat.id, level).await?;
    dialogue.update(State::ReceiveModeChoice { level }).await?;
    Ok(())
}

async fn receive_mode_choice(
    bot: Bot,
    dialogue: BotDialogue,
    level: quiz::Level,
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(START_QUIZ_BUTTON) => {
            let mut session = quiz::Session::new(quiz::questions::placement_questions());
            session.start();

            bot.send_message(msg.chat.id, "Начнём тест! Выберите один из вариантов ответа.")
                .await?;
            send_question(&bot, msg.chat.id, &session).await?;

            dialogue.update(State::Quiz { session, level }).await?;
        }
        Some(OPEN_CHAT_BUTTON) => {
            let mut log = chat::MessageLog::new();
            log.push_assistant(chat::script::GREETING);

            bot.send_message(msg.chat.id, chat::script::GREETING)
                .reply_markup(chat_keyboard(&log))
                .await?;

            dialogue.update(State::Chat { log, level }).await?;
        }
        _ => {
            bot.send_message(msg.chat.id, "Пожалуйста, выберите один из вариантов")
                .await?;
        }
    }
    Ok(())
}

async fn quiz_step(
    bot: Bot,
    dialogue: BotDialogue,
    (mut session, level): (quiz::Session, quiz::Level),
    msg: Message,
) -> HandlerResult {
    let answer_text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "Пожалуйста, выберите ответ кнопкой")
                .await?;
            return Ok(());
        }
    };

    let (selected, answered_right, correct_text) = match session.current() {
        Some(question) => {
            // Free-typed text that is not one of the options maps to an
            // out-of-range index, which the engine counts as a wrong answer.
            let selected = question
                .options
                .iter()
                .position(|option| option == answer_text)
                .unwrap_or(question.options.len());
            (
                selected,
                selected == question.correct,
                question
                    .options
                    .get(question.correct)
                    .cloned()
                    .unwrap_or_default(),
            )
        }
        None => {
            send_menu(&bot, msg.chat.id, level).await?;
            dialogue.update(State::ReceiveModeChoice { level }).await?;
            return Ok(());
        }
    };

    let feedback = if answered_right {
        "Правильно!".to_string()
    } else {
        format!("Неправильно. Правильный ответ: {}", correct_text)
    };
    bot.send_message(msg.chat.id, feedback).await?;

    match session.answer(selected) {
        Some(completion) => {
            log::debug!(
                "quiz finished in chat {}: score {} -> {:?}",
                msg.chat.id,
                completion.score,
                completion.level
            );
            let summary = format!(
                "Тест завершён! Правильных ответов: {} из {}.\nВаш уровень: {}",
                completion.score,
                session.question_count(),
                completion.level.title()
            );
            bot.send_message(msg.chat.id, summary).await?;

            send_menu(&bot, msg.chat.id, completion.level).await?;
            dialogue
                .update(State::ReceiveModeChoice {
                    level: completion.level,
                })
                .await?;
        }
        None => {
            send_question(&bot, msg.chat.id, &session).await?;
            dialogue.update(State::Quiz { session, level }).await?;
        }
    }
    Ok(())
}

async fn chat_message(
    responder: Arc<Responder>,
    bot: Bot,
    dialogue: BotDialogue,
    (mut log, level): (chat::MessageLog, quiz::Level),
    msg: Message,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "Пожалуйста, напишите вопрос текстом")
                .await?;
            return Ok(());
        }
    };

    if text == MENU_BUTTON {
        send_menu(&bot, msg.chat.id, level).await?;
        dialogue.update(State::ReceiveModeChoice { level }).await?;
        return Ok(());
    }

    // Blank input is dropped without any reply.
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let kind = if chat::script::suggestions().iter().any(|s| s == trimmed) {
        chat::MessageKind::Suggestion
    } else {
        chat::MessageKind::Normal
    };
    log.push_user(trimmed, kind);

    // We don't really care about the result here, the typing hint is cosmetic
    let _ = bot
        .send_chat_action(msg.chat.id, ChatAction::Typing)
        .await;

    if let Some(reply) = responder.respond_after_delay(trimmed).await {
        let stamp = log.push_assistant(&reply).time_short();
        log::debug!(
            "[{}] replied in chat {} ({} messages in log)",
            stamp,
            msg.chat.id,
            log.len()
        );

        bot.send_message(msg.chat.id, reply)
            .reply_markup(chat_keyboard(&log))
            .await?;
    }

    dialogue.update(State::Chat { log, level }).await?;
    Ok(())
}

async fn send_menu(bot: &Bot, chat_id: ChatId, level: quiz::Level) -> HandlerResult {
    let keyboard = KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(START_QUIZ_BUTTON),
        KeyboardButton::new(OPEN_CHAT_BUTTON),
    ]]);
    bot.send_message(
        chat_id,
        format!(
            "Текущий уровень: {}\nЧто бы вы хотели сделать?",
            level.title()
        ),
    )
    .reply_markup(keyboard)
    .await?;
    Ok(())
}

async fn send_question(bot: &Bot, chat_id: ChatId, session: &quiz::Session) -> HandlerResult {
    let question = match session.current() {
        Some(question) => question,
        None => return Ok(()),
    };
    let (number, total) = session.progress();

    let keyboard = KeyboardMarkup::new(
        question
            .options
            .iter()
            .map(|option| vec![KeyboardButton::new(option.clone())])
            .collect::<Vec<_>>(),
    );
    bot.send_message(
        chat_id,
        format!("Вопрос {} из {}:\n{}", number, total, question.prompt),
    )
    .reply_markup(keyboard)
    .await?;
    Ok(())
}

// Suggestion buttons are only offered while the chat is still fresh, like on
// the original support page.
fn chat_keyboard(log: &chat::MessageLog) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = Vec::new();
    if log.len() <= 1 {
        for suggestion in chat::script::suggestions() {
            rows.push(vec![KeyboardButton::new(suggestion)]);
        }
    }
    rows.push(vec![KeyboardButton::new(MENU_BUTTON)]);
    KeyboardMarkup::new(rows)
}
