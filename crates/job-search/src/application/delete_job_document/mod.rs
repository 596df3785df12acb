mod delete_job_document_command;
mod delete_job_document_use_case;


pub use delete_job_document_command::DeleteJobDocumentCommand;
pub use delete_job_document_use_case::DeleteJobDocumentUseCase;
