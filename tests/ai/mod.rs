mod bot_game;
