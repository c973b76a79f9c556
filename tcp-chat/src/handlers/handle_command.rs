use super::handle_error::handle_error;
use crate::{
    chat_service::ChatService,
    commands::{
        acc::Acc, info::Info, login::Login, msg::Msg, name::Name, passwd::Passwd, quit::Quit,
        traits::command_handler::CommandHandler, unknown::Unknown, who::Who,
    },
    errors::command_error::CommandError,
    models::command::{Command, Verb},
};
use log::{info, trace};

pub fn handle_command(chat_service: &mut ChatService, command: Command) {
    trace!(
        "C {}: /{} {}",
        command.session_id,
        command.verb,
        command.arguments.join(" ")
    );

    let result = match command.verb {
        Verb::Unknown => Unknown.handle(chat_service, &command),
        Verb::Name => Name.handle(chat_service, &command),
        Verb::Msg => Msg.handle(chat_service, &command),
        Verb::Acc => Acc.handle(chat_service, &command),
        Verb::Login => Login.handle(chat_service, &command),
        Verb::Passwd => Passwd.handle(chat_service, &command),
        Verb::Info => Info.handle(chat_service, &command),
        Verb::Who => Who.handle(chat_service, &command),
        Verb::Quit => Quit.handle(chat_service, &command),
    };

    match result {
        Ok(replies) => chat_service.send_reply_from_server(&command.session_id, &replies),

        Err(usage_error @ CommandError::WrongNumberOfArguments(_)) => {
            info!(
                "Session {} sent /{} with {} arguments",
                command.session_id,
                command.verb,
                command.arguments.len()
            );

            chat_service.send_from_server(&command.session_id, &usage_error.to_string());
        }

        Err(CommandError::Chat(chat_error)) => {
            handle_error(chat_service, &command.session_id, &chat_error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::DEFAULT_OUTBOUND_CAPACITY,
        models::session::{Session, SessionId},
    };
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    struct Client {
        id: SessionId,
        rx: mpsc::Receiver<String>,
    }

    impl Client {
        fn run(&self, chat_service: &mut ChatService, line: &str) {
            let mut words = line.split_whitespace();
            let verb = Verb::parse(words.next().unwrap_or_default());
            let arguments = words.map(str::to_string).collect();
            handle_command(chat_service, Command::new(self.id.clone(), verb, arguments));
        }

        fn lines(&mut self) -> Vec<String> {
            let mut lines = Vec::new();
            while let Ok(item) = self.rx.try_recv() {
                lines.extend(item.split('\n').map(str::to_string));
            }
            lines
        }
    }

    fn connect(chat_service: &mut ChatService) -> Client {
        connect_with_capacity(chat_service, 16)
    }

    fn connect_with_capacity(chat_service: &mut ChatService, capacity: usize) -> Client {
        let (tx, rx) = mpsc::channel(capacity);
        let session = Session::new(tx, CancellationToken::new());
        let id = session.id.clone();
        chat_service.register_session(session);
        Client { id, rx }
    }

    #[test]
    fn unknown_command() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        client.run(&mut chat_service, "dance wildly");
        client.run(&mut chat_service, "");
        assert_eq!(
            client.lines(),
            ["[server] Unknown command", "[server] Unknown command"]
        );
    }

    #[test]
    fn wrong_arity_replies_with_usage() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        for (line, usage) in [
            ("name", "/name <new username>"),
            ("name a b", "/name <new username>"),
            ("msg max", "/msg <username> <message...>"),
            ("msg", "/msg <username> <message...>"),
            ("acc max", "/acc <username> <password>"),
            ("login max 1234 extra", "/login <username> <password>"),
            ("passwd 1234", "/passwd <old password> <new password>"),
        ] {
            client.run(&mut chat_service, line);
            assert_eq!(
                client.lines(),
                [format!("[server] Wrong number of arguments, usage: {usage}")],
                "{line}"
            );
        }

        assert_eq!(chat_service.stats().accounts, 0);
    }

    #[test]
    fn account_lifecycle_replies() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        client.run(&mut chat_service, "acc max 1234");
        client.run(&mut chat_service, "acc max 1234");
        client.run(&mut chat_service, "login max 4321");
        client.run(&mut chat_service, "login maria 1234");
        client.run(&mut chat_service, "login max 1234");
        client.run(&mut chat_service, "name maxine");
        client.run(&mut chat_service, "passwd 1234 password");

        assert_eq!(
            client.lines(),
            [
                "[server] Created new account, please login now",
                "[server] a user with that name already exists",
                "[server] wrong password",
                "[server] a user with that name does not exist",
                "[server] Logged in",
                "[server] Changed username to maxine",
                "[server] Changed password",
            ]
        );
    }

    #[test]
    fn commands_that_need_login_say_so() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        client.run(&mut chat_service, "name maxine");
        client.run(&mut chat_service, "msg mo hi there");
        client.run(&mut chat_service, "passwd 1234 password");

        assert_eq!(
            client.lines(),
            [
                "[server] you are not logged in",
                "[server] you are not logged in",
                "[server] you are not logged in",
            ]
        );
    }

    #[test]
    fn msg_joins_message_words() {
        let mut chat_service = ChatService::new();
        let mut max = connect(&mut chat_service);
        let mut mo = connect(&mut chat_service);

        max.run(&mut chat_service, "acc max 1234");
        max.run(&mut chat_service, "login max 1234");
        mo.run(&mut chat_service, "acc mo secret");
        mo.run(&mut chat_service, "login mo secret");
        max.lines();
        mo.lines();

        max.run(&mut chat_service, "msg mo how are   you");
        max.run(&mut chat_service, "msg maria hi");

        assert_eq!(mo.lines(), ["[p max] how are you"]);
        assert_eq!(
            max.lines(),
            ["[server] your message partner does not seem to be logged in"]
        );
    }

    #[test]
    fn info_reports_session_and_name() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        client.run(&mut chat_service, "info");
        client.run(&mut chat_service, "acc max 1234");
        client.run(&mut chat_service, "login max 1234");
        client.lines();
        client.run(&mut chat_service, "info");

        let id = client.id.clone();
        assert_eq!(
            client.lines(),
            [
                format!("[server] sessionId: {id}"),
                String::from("[server] userName: max"),
            ]
        );
    }

    #[test]
    fn who_lists_one_name_per_line() {
        let mut chat_service = ChatService::new();
        let mut max = connect(&mut chat_service);
        let mo = connect(&mut chat_service);

        max.run(&mut chat_service, "acc max 1234");
        max.run(&mut chat_service, "login max 1234");
        mo.run(&mut chat_service, "acc mo secret");
        mo.run(&mut chat_service, "login mo secret");
        max.lines();

        max.run(&mut chat_service, "who");
        let mut names = max.lines();
        names.sort();

        assert_eq!(names, ["[server] max", "[server] mo"]);
    }

    #[test]
    fn who_reply_fits_in_queue_whatever_the_roster_size() {
        let mut chat_service = ChatService::new();
        let mut asker = connect_with_capacity(&mut chat_service, DEFAULT_OUTBOUND_CAPACITY);
        asker.run(&mut chat_service, "acc asker 1234");
        asker.run(&mut chat_service, "login asker 1234");
        asker.lines();

        let mut expected = vec![String::from("[server] asker")];
        for number in 0..DEFAULT_OUTBOUND_CAPACITY {
            let name = format!("user{number}");
            let user = connect(&mut chat_service);
            user.run(&mut chat_service, &format!("acc {name} 1234"));
            user.run(&mut chat_service, &format!("login {name} 1234"));
            expected.push(format!("[server] {name}"));
        }

        asker.run(&mut chat_service, "who");

        let mut names = asker.lines();
        names.sort();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(chat_service.name_for_session(&asker.id), "asker");
        assert_eq!(chat_service.stats().sessions, DEFAULT_OUTBOUND_CAPACITY + 1);
    }

    #[test]
    fn quit_removes_session() {
        let mut chat_service = ChatService::new();
        let mut client = connect(&mut chat_service);

        client.run(&mut chat_service, "quit");
        client.run(&mut chat_service, "quit");

        assert!(client.lines().is_empty());
        assert_eq!(chat_service.stats().sessions, 0);
    }
}
