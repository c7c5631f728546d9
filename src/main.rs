fn main() {
    game_cards::start();
}
