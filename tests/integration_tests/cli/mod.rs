mod mod_cli;
