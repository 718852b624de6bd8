//! Startup banner and command reference.

pub const BANNER: &str = "
  ██████╗██╗  ██╗ █████╗ ████████╗
 ██╔════╝██║  ██║██╔══██╗╚══██╔══╝
 ██║     ███████║███████║   ██║
 ██║     ██╔══██║██╔══██║   ██║
 ╚██████╗██║  ██║██║  ██║   ██║
  ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝

      Simple TCP Chat Client
  --------------------------------

  Commands:
    /identify <username>
    /status ACTIVE|AWAY|BUSY
    /users

    /msg <user> <text>
    /all <text>

    /newroom <room>
    /invite <room> <user> [user ...]
    /join <room>
    /roomusers <room>
    /roommsg <room> <text>
    /leave <room>

    /disconnect
    /quit

  Notes:
   - You must /identify before using other commands
   - Usernames no longer than 8 characters and without blanks
   - Room names no longer than 16 characters
   - Room names with spaces must be quoted
   - Message text never needs quotes
";
