//! Hardcoded sample rows for the development database.

/// Argon2id hash shared by the admin and every fixture user.
pub const PASSWORD_HASH: &str = "$argon2id$v=19$m=65536,t=20,p=1$Vmb9bCJSHUOJDiS+amdMkzxTljfkanX0JKsYecdBCkQ$slQjytnGeh4/ScqmXOJ6mjjfdmu/9eVSd6dV032nrm8";

/// Module that owns the fixture messages.
pub const MESSAGES_MODULE: &str = "org.libersoft.messages";

pub const USERNAMES: [&str; 4] = ["user1", "user2", "user3", "user4"];

/// One stored copy of a message. A conversation message appears twice,
/// once per participant, sharing the same UID.
#[derive(Debug, Clone, Copy)]
pub struct MessageFixture {
    pub owner: i64,
    pub uid: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub body: &'static str,
    pub seen: Option<&'static str>,
    pub created: &'static str,
}

const UID_ABC: &str = "0.b09dmbtebth0.utiw7sn3k9f0.0o0g0hg9eed0.7rgwhndqm9q";
const UID_HELLO: &str = "0.b4j19b5zex70.a72knqivskn0.kr3vzg48xfn0.m08j39zy1or";
const UID_GOOD: &str = "0.nm8szdn6l3l0.23osj3k5imw0.7htrja5b4380.jc7x8267fo";
const UID_LONG: &str = "0.4pvy92zmo2a0.907pal1cgf50.4zionrttiri0.p3uny72ata";

const LONG_BODY: &str = "RARARARARERERERERRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRRH!";

pub const MESSAGES: [MessageFixture; 8] = [
    MessageFixture {
        owner: 2,
        uid: UID_ABC,
        from: "user2",
        to: "user1",
        body: "ABC",
        seen: Some("2024-10-26 23:29:33"),
        created: "2024-10-26 23:21:15",
    },
    MessageFixture {
        owner: 1,
        uid: UID_ABC,
        from: "user2",
        to: "user1",
        body: "ABC",
        seen: Some("2024-10-26 23:29:33"),
        created: "2024-10-26 23:21:16",
    },
    MessageFixture {
        owner: 3,
        uid: UID_HELLO,
        from: "user3",
        to: "user1",
        body: "hello fron user3",
        seen: Some("2024-10-26 23:29:08"),
        created: "2024-10-26 23:28:29",
    },
    MessageFixture {
        owner: 1,
        uid: UID_HELLO,
        from: "user3",
        to: "user1",
        body: "hello fron user3",
        seen: Some("2024-10-26 23:29:08"),
        created: "2024-10-26 23:28:29",
    },
    MessageFixture {
        owner: 1,
        uid: UID_GOOD,
        from: "user1",
        to: "user3",
        body: "good to see you user3",
        seen: None,
        created: "2024-10-26 23:29:20",
    },
    MessageFixture {
        owner: 3,
        uid: UID_GOOD,
        from: "user1",
        to: "user3",
        body: "good to see you user3",
        seen: None,
        created: "2024-10-26 23:29:20",
    },
    MessageFixture {
        owner: 1,
        uid: UID_LONG,
        from: "user1",
        to: "user2",
        body: LONG_BODY,
        seen: None,
        created: "2024-10-26 23:30:03",
    },
    MessageFixture {
        owner: 2,
        uid: UID_LONG,
        from: "user1",
        to: "user2",
        body: LONG_BODY,
        seen: None,
        created: "2024-10-26 23:30:03",
    },
];

/// `user@host`
pub fn address(username: &str, host: &str) -> String {
    format!("{}@{}", username, host)
}

/// UID tokens carry the host so fixture sets for different hosts never collide.
pub fn uid_token(uid: &str, host: &str) -> String {
    format!("{}{}", uid, host)
}

/// Per-module database name, `org.libersoft.messages` -> `yellow_module_org_libersoft_messages`.
pub fn module_database(module: &str) -> String {
    format!("yellow_module_{}", module.replace('.', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn module_database_name() {
        assert_eq!(
            module_database(MESSAGES_MODULE),
            "yellow_module_org_libersoft_messages"
        );
    }

    #[test]
    fn every_message_is_stored_for_both_participants() {
        let owners = |uid: &str| {
            MESSAGES
                .iter()
                .filter(|m| m.uid == uid)
                .map(|m| m.owner)
                .collect::<HashSet<_>>()
        };
        for m in MESSAGES.iter() {
            let from = USERNAMES.iter().position(|u| *u == m.from).unwrap() as i64 + 1;
            let to = USERNAMES.iter().position(|u| *u == m.to).unwrap() as i64 + 1;
            assert_eq!(owners(m.uid), HashSet::from([from, to]), "uid {}", m.uid);
        }
    }

    #[test]
    fn owner_uid_pairs_are_unique() {
        let pairs = MESSAGES
            .iter()
            .map(|m| (m.owner, m.uid))
            .collect::<HashSet<_>>();
        assert_eq!(pairs.len(), MESSAGES.len());
    }
}
