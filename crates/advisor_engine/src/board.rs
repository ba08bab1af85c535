//! Rules provider backed by `shakmaty`
//!
//! [`ChessBoard`] wraps a `shakmaty::Chess` position and keeps the positions it
//! replaced on a stack, so [`Rules::undo`] is a pop and repetition counting can
//! look back along the line being searched.

use shakmaty::fen::Fen;
use shakmaty::{
    attacks, Bitboard, CastlingMode, CastlingSide, Chess, EnPassantMode, Position, Role,
};

use crate::error::{EngineError, EngineResult};
use crate::hash::PositionKey;
use crate::rules::Rules;
use crate::types::{Color, Move, Piece, PieceKind, Square};

/// Occurrences of one position that make the game a draw
const FIVEFOLD_REPETITION: usize = 5;

/// Half-move clock value of the 75-move rule
const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Standard chess position with apply/undo history
#[derive(Debug, Clone)]
pub struct ChessBoard {
    position: Chess,
    history: Vec<Chess>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl ChessBoard {
    pub fn from_position(position: Chess) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    /// Number of moves currently applied on top of the initial position
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Translate an engine move into the matching `shakmaty` move
    ///
    /// A king stepping two files is castling; a pawn moving diagonally onto an
    /// empty square is an en-passant capture.
    fn to_rules_move(&self, mv: &Move) -> Option<shakmaty::Move> {
        let board = self.position.board();
        let from = rules_square(mv.from);
        let to = rules_square(mv.to);
        let role = board.role_at(from)?;

        let file_step = mv.to.file().abs_diff(mv.from.file());
        let rules_move = match role {
            Role::King if file_step == 2 && mv.from.rank() == mv.to.rank() => {
                let rook_file = if mv.to.file() > mv.from.file() { 7 } else { 0 };
                shakmaty::Move::Castle {
                    king: from,
                    rook: rules_square(Square::from_coords(rook_file, mv.from.rank())),
                }
            }
            Role::Pawn if file_step == 1 && board.piece_at(to).is_none() => {
                shakmaty::Move::EnPassant { from, to }
            }
            _ => shakmaty::Move::Normal {
                role,
                from,
                capture: board.role_at(to),
                to,
                promotion: mv.promotion.map(rules_role),
            },
        };
        Some(rules_move)
    }

    fn played(&self, rules_move: shakmaty::Move) -> Chess {
        let mut next = self.position.clone();
        next.play_unchecked(rules_move);
        next
    }

    fn pawn_move_count(&self, from: Square, side: Color, occupied: Bitboard, theirs: Bitboard) -> usize {
        let (start_rank, last_rank) = match side {
            Color::White => (1, 7),
            Color::Black => (6, 0),
        };
        let weight = |target: Square| if target.rank() == last_rank { 4 } else { 1 };
        let forward = side.forward();
        let mut count = 0;

        if let Some(one) = from.offset(0, forward) {
            if !occupied.contains(rules_square(one)) {
                count += weight(one);
                if from.rank() == start_rank {
                    if let Some(two) = from.offset(0, 2 * forward) {
                        if !occupied.contains(rules_square(two)) {
                            count += 1;
                        }
                    }
                }
            }
        }

        let captures = attacks::pawn_attacks(rules_color(side), rules_square(from)) & theirs;
        for target in captures {
            count += weight(engine_square(target));
        }
        count
    }

    /// One move per castling right whose path between king and rook is empty
    fn castling_move_count(&self, side: Color, occupied: Bitboard) -> usize {
        let castles = self.position.castles();
        let color = rules_color(side);
        CastlingSide::ALL
            .into_iter()
            .filter(|&wing| castles.rook(color, wing).is_some())
            .filter(|&wing| (castles.path(color, wing) & occupied).is_empty())
            .count()
    }

    /// Pawns of `side` that can capture onto the en-passant square
    fn en_passant_count(&self, side: Color) -> usize {
        if self.position.turn() != rules_color(side) {
            return 0;
        }
        self.position
            .ep_square(EnPassantMode::PseudoLegal)
            .map_or(0, |target| {
                let pawns = self.position.board().by_piece(rules_color(side).pawn());
                (attacks::pawn_attacks(rules_color(!side), target) & pawns).count()
            })
    }
}

impl Rules for ChessBoard {
    type Key = PositionKey;

    fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };
        let setup: Fen = fen.trim().parse().map_err(|err| invalid(format!("{err}")))?;
        let position: Chess = setup
            .into_position(CastlingMode::Standard)
            .map_err(|err| invalid(format!("{err}")))?;
        Ok(Self::from_position(position))
    }

    fn side_to_move(&self) -> Color {
        engine_color(self.position.turn())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(rules_square(square))
            .map(|piece| Piece::new(engine_kind(piece.role), engine_color(piece.color)))
    }

    fn fullmove_number(&self) -> u32 {
        self.position.fullmoves().get()
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .map(|rules_move| engine_move(&rules_move))
            .collect()
    }

    fn pseudo_legal_move_count(&self, side: Color) -> usize {
        let board = self.position.board();
        let own = board.by_color(rules_color(side));
        let theirs = board.by_color(rules_color(!side));
        let occupied = board.occupied();

        own.into_iter()
            .filter_map(|square| board.piece_at(square).map(|piece| (square, piece)))
            .map(|(square, piece)| match piece.role {
                Role::Pawn => self.pawn_move_count(engine_square(square), side, occupied, theirs),
                _ => (attacks::attacks(square, piece, occupied) & !own).count(),
            })
            .sum::<usize>()
            + self.castling_move_count(side, occupied)
            + self.en_passant_count(side)
    }

    fn is_capture(&self, mv: &Move) -> bool {
        self.to_rules_move(mv)
            .is_some_and(|rules_move| rules_move.is_capture())
    }

    fn gives_check(&self, mv: &Move) -> bool {
        self.to_rules_move(mv)
            .is_some_and(|rules_move| self.played(rules_move).is_check())
    }

    fn apply(&mut self, mv: &Move) -> EngineResult<()> {
        let rules_move = self
            .to_rules_move(mv)
            .filter(|rules_move| self.position.is_legal(*rules_move))
            .ok_or_else(|| EngineError::IllegalMove { mv: mv.to_string() })?;
        let next = self.played(rules_move);
        self.history.push(std::mem::replace(&mut self.position, next));
        Ok(())
    }

    fn undo(&mut self) -> EngineResult<()> {
        self.position = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        Ok(())
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_draw_by_repetition_or_move_count(&self) -> bool {
        if self.position.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            return true;
        }
        // Positions are only repeated by reversible moves, so a short history can be skipped
        if self.history.len() < 2 * (FIVEFOLD_REPETITION - 1) {
            return false;
        }
        let current = position_key(&self.position);
        let occurrences = self
            .history
            .iter()
            .filter(|earlier| position_key(earlier).repeats(&current))
            .count();
        occurrences + 1 >= FIVEFOLD_REPETITION
    }

    fn is_attacked_by(&self, square: Square, attacker: Color) -> bool {
        let board = self.position.board();
        !board
            .attacks_to(rules_square(square), rules_color(attacker), board.occupied())
            .is_empty()
    }

    fn canonical_key(&self) -> PositionKey {
        position_key(&self.position)
    }
}

fn position_key(position: &Chess) -> PositionKey {
    let board = position.board();
    let mut placement = [0u8; 64];
    for square in Square::all() {
        if let Some(piece) = board.piece_at(rules_square(square)) {
            let offset = match piece.color {
                shakmaty::Color::White => 1,
                shakmaty::Color::Black => 7,
            };
            placement[square.index()] = offset + engine_kind(piece.role).index() as u8;
        }
    }

    PositionKey {
        placement,
        turn: engine_color(position.turn()),
        castling: position.castles().castling_rights().0,
        en_passant: position
            .ep_square(EnPassantMode::Legal)
            .map(|square| square as u8),
        halfmoves: position.halfmoves(),
        fullmoves: position.fullmoves().get(),
    }
}

fn engine_move(rules_move: &shakmaty::Move) -> Move {
    let to = engine_square(rules_move.to());
    match *rules_move {
        // shakmaty encodes castling as king-takes-rook; report the king's step
        shakmaty::Move::Castle { king, rook } => {
            let king = engine_square(king);
            let file = if engine_square(rook).file() > king.file() { 6 } else { 2 };
            Move::new(king, Square::from_coords(file, king.rank()), None)
        }
        _ => Move::new(
            rules_move.from().map(engine_square).unwrap_or(to),
            to,
            rules_move.promotion().map(engine_kind),
        ),
    }
}

fn rules_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(square.index() as u32)
}

fn engine_square(square: shakmaty::Square) -> Square {
    Square::from_coords(square as u8 % 8, square as u8 / 8)
}

fn rules_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

fn engine_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn rules_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

fn engine_kind(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn board(fen: &str) -> ChessBoard {
        ChessBoard::from_fen(fen).expect("valid FEN")
    }

    fn mv(text: &str) -> Move {
        Move::from_uci(text).expect("valid UCI move")
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = board(START_FEN);
        assert_eq!(board.legal_moves().len(), 20);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.fullmove_number(), 1);
        assert_eq!(
            board.piece_at(Square::from_name("e1").unwrap()),
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn test_invalid_fen_is_reported() {
        let err = ChessBoard::from_fen("not a position").unwrap_err();
        assert!(matches!(err, EngineError::InvalidFen { .. }));
    }

    #[test]
    fn test_apply_and_undo_restore_key() {
        let mut board = board(START_FEN);
        let before = board.canonical_key();

        board.apply(&mv("e2e4")).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_ne!(board.canonical_key(), before);

        board.undo().unwrap();
        assert_eq!(board.canonical_key(), before);
        assert_eq!(board.undo(), Err(EngineError::EmptyHistory));
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut board = board(START_FEN);
        let err = board.apply(&mv("e2e5")).unwrap_err();
        assert_eq!(
            err,
            EngineError::IllegalMove {
                mv: "e2e5".to_string()
            }
        );
        assert_eq!(board.depth(), 0);
    }

    #[test]
    fn test_castling_uses_king_step() {
        let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let moves = board.legal_moves();
        assert!(moves.contains(&mv("e1g1")));
        assert!(moves.contains(&mv("e1c1")));

        board.apply(&mv("e1g1")).unwrap();
        assert_eq!(
            board.piece_at(Square::from_name("f1").unwrap()),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn test_en_passant_capture() {
        let mut board = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let ep = mv("e5d6");
        assert!(board.legal_moves().contains(&ep));
        assert!(board.is_capture(&ep));

        board.apply(&ep).unwrap();
        assert_eq!(board.piece_at(Square::D5), None);
    }

    #[test]
    fn test_promotion_moves_are_distinct() {
        let board = board("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
        let promotions: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|m| m.promotion.is_some())
            .collect();
        assert_eq!(promotions.len(), 4);
        assert!(board.is_noisy(&mv("e7e8q")));
    }

    #[test]
    fn test_gives_check_and_capture_queries() {
        let board = board("4k3/8/8/8/8/8/3q4/R2R2K1 w - - 0 1");
        assert!(board.is_capture(&mv("d1d2")));
        assert!(!board.is_capture(&mv("a1a2")));
        assert!(board.gives_check(&mv("a1a8")));
        assert!(!board.gives_check(&mv("a1a2")));
    }

    #[test]
    fn test_pseudo_legal_count_for_both_sides() {
        let board = board(START_FEN);
        // 16 pawn moves + 4 knight moves, the same for either side
        assert_eq!(board.pseudo_legal_move_count(Color::White), 20);
        assert_eq!(board.pseudo_legal_move_count(Color::Black), 20);
    }

    #[test]
    fn test_pseudo_legal_count_includes_castling() {
        let with_rights = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let without = board("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
        for side in [Color::White, Color::Black] {
            assert_eq!(
                with_rights.pseudo_legal_move_count(side),
                without.pseudo_legal_move_count(side) + 2
            );
        }
        assert_eq!(with_rights.pseudo_legal_move_count(Color::White), 26);

        // A piece on b1 blocks the queen-side path
        let blocked = board("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        let blocked_without = board("r3k2r/8/8/8/8/8/8/RN2K2R w - - 0 1");
        assert_eq!(
            blocked.pseudo_legal_move_count(Color::White),
            blocked_without.pseudo_legal_move_count(Color::White) + 1
        );
    }

    #[test]
    fn test_pseudo_legal_count_includes_en_passant() {
        let with_ep = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let without = board("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
        assert_eq!(
            with_ep.pseudo_legal_move_count(Color::White),
            without.pseudo_legal_move_count(Color::White) + 1
        );
        assert_eq!(
            with_ep.pseudo_legal_move_count(Color::Black),
            without.pseudo_legal_move_count(Color::Black)
        );
    }

    #[test]
    fn test_attack_queries() {
        let board = board(START_FEN);
        let e3 = Square::from_name("e3").unwrap();
        assert!(board.is_attacked_by(e3, Color::White));
        assert!(!board.is_attacked_by(e3, Color::Black));
    }

    #[test]
    fn test_terminal_detection() {
        let mate = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(mate.is_checkmate());
        assert!(mate.is_game_over());

        let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(stalemate.is_stalemate());

        let bare_kings = board("8/8/4k3/8/8/4K3/8/8 w - - 0 1");
        assert!(bare_kings.is_insufficient_material());

        let seventy_five = board("8/8/4k3/8/8/4K3/8/R7 w - - 150 120");
        assert!(seventy_five.is_draw_by_repetition_or_move_count());
    }

    #[test]
    fn test_fivefold_repetition_through_history() {
        let mut board = board(START_FEN);
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
        for _ in 0..4 {
            assert!(!board.is_draw_by_repetition_or_move_count());
            for text in shuffle {
                board.apply(&mv(text)).unwrap();
            }
        }
        assert!(board.is_draw_by_repetition_or_move_count());
    }
}
