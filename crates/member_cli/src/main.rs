//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `member_core` linkage and wiring from a plain executable.
//! - Register names given on the command line and print each outcome.
//!
//! Usage: `member_cli [--guarded] <name>...`

use member_core::{DirectoryConfig, Member, MemberDirectory, MemoryMemberStore};

fn main() {
    println!("member_core ping={}", member_core::ping());
    println!("member_core version={}", member_core::core_version());

    let mut config = DirectoryConfig::default();
    let mut names = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--guarded" {
            config = DirectoryConfig::serialized();
        } else {
            names.push(arg);
        }
    }

    let directory = MemberDirectory::with_config(MemoryMemberStore::new(), config);
    for name in names {
        match directory.register(Member::new(name.clone())) {
            Ok(id) => println!("registered {name} id={id}"),
            Err(err) => println!("rejected {name}: {err}"),
        }
    }

    let mut members = directory.list_members();
    members.sort_by_key(|member| member.id);
    println!("members={}", members.len());
    for member in members {
        if let Some(id) = member.id {
            println!("{id}\t{}", member.name);
        }
    }
}
