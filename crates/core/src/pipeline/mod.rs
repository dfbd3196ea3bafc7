pub mod practice_round_use_case;
pub mod score_attempt_use_case;
pub mod translate_phrase_use_case;
