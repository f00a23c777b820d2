use catalog_contracts::mapper::FormMapper;
use catalog_model::forms::{GameForm, ProgramForm};
use catalog_model::software::{Game, Program};

use crate::error::{MappingError, Result};
use crate::mapper::parse::{required, required_number};

#[derive(Debug, Clone, Copy, Default)]
pub struct GameMapper;

impl FormMapper for GameMapper {
    type Entity = Game;
    type Form = GameForm;
    type Error = MappingError;

    fn to_form(&self, game: &Game) -> GameForm {
        GameForm {
            id: game.id,
            name: Some(game.name.clone()),
            wiki_en: game.wiki_en.clone(),
            wiki_cz: game.wiki_cz.clone(),
            media_count: Some(game.media_count.to_string()),
            crack: game.crack,
            serial_key: game.serial_key,
            patch: game.patch,
            trainer: game.trainer,
            trainer_data: game.trainer_data,
            editor: game.editor,
            saves: game.saves,
            other_data: game.other_data.clone(),
            note: game.note.clone(),
            position: game.position,
        }
    }

    fn to_entity(&self, form: &GameForm) -> Result<Game> {
        Ok(Game {
            id: form.id,
            name: required(&form.name, "name")?,
            wiki_en: form.wiki_en.clone(),
            wiki_cz: form.wiki_cz.clone(),
            media_count: required_number(&form.media_count, "mediaCount")?,
            crack: form.crack,
            serial_key: form.serial_key,
            patch: form.patch,
            trainer: form.trainer,
            trainer_data: form.trainer_data,
            editor: form.editor,
            saves: form.saves,
            other_data: form.other_data.clone(),
            note: form.note.clone(),
            position: form.position,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramMapper;

impl FormMapper for ProgramMapper {
    type Entity = Program;
    type Form = ProgramForm;
    type Error = MappingError;

    fn to_form(&self, program: &Program) -> ProgramForm {
        ProgramForm {
            id: program.id,
            name: Some(program.name.clone()),
            wiki_en: program.wiki_en.clone(),
            wiki_cz: program.wiki_cz.clone(),
            media_count: Some(program.media_count.to_string()),
            crack: program.crack,
            serial_key: program.serial_key,
            other_data: program.other_data.clone(),
            note: program.note.clone(),
            position: program.position,
        }
    }

    fn to_entity(&self, form: &ProgramForm) -> Result<Program> {
        Ok(Program {
            id: form.id,
            name: required(&form.name, "name")?,
            wiki_en: form.wiki_en.clone(),
            wiki_cz: form.wiki_cz.clone(),
            media_count: required_number(&form.media_count, "mediaCount")?,
            crack: form.crack,
            serial_key: form.serial_key,
            other_data: form.other_data.clone(),
            note: form.note.clone(),
            position: form.position,
        })
    }
}
